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

pub fn opt_deserialize<'de, D>(deserializer: D) -> Result<Option<users::User>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct UserVisitor;

    impl<'de> serde::de::Visitor<'de> for UserVisitor {
        type Value = Option<users::User>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a system user name")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            users::get_user_by_name(v)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("user not found: '{v}'")))
        }
    }

    deserializer.deserialize_any(UserVisitor)
}

pub fn opt_serialize<S>(this: &Option<users::User>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match this {
        Some(user) => serializer.serialize_str(&user.name().to_string_lossy()),
        None => serializer.serialize_none(),
    }
}
