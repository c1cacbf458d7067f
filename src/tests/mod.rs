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
mod directive;
mod from_toml;
mod plan;
mod validate;

pub(crate) fn host_from_toml(input: &str) -> crate::FieldHost {
    toml::from_str::<crate::FieldHost>(input).expect("valid host table")
}

/// Shorthand: validate a host table for a machine with IPv6 support.
pub(crate) fn validated(input: &str) -> crate::Mailhost {
    crate::Mailhost::validate(
        "testhost",
        host_from_toml(input),
        &crate::FieldSsl::default(),
        &crate::HostFacts { ipv6: true },
    )
    .expect("valid host")
}
