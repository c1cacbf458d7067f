/*
 * vMailhost mail proxy configuration renderer
 * Copyright (C) 2026 Team vMailhost
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program. If not, see https://www.gnu.org/licenses/.
 *
*/

pub fn opt_deserialize<'de, D>(deserializer: D) -> Result<Option<users::Group>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct GroupVisitor;

    impl<'de> serde::de::Visitor<'de> for GroupVisitor {
        type Value = Option<users::Group>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a system group name")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            users::get_group_by_name(v)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("group not found: '{v}'")))
        }
    }

    deserializer.deserialize_any(GroupVisitor)
}

pub fn opt_serialize<S>(this: &Option<users::Group>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match this {
        Some(group) => serializer.serialize_str(&group.name().to_string_lossy()),
        None => serializer.serialize_none(),
    }
}
