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

/// Facts about the machine the rendered configuration is applied on.
///
/// Facts are inputs, not hidden state: [`HostFacts::gather`] probes the local
/// system, but a caller rendering for another machine builds the value by
/// hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFacts {
    /// the machine can bind IPv6 sockets
    pub ipv6: bool,
}

impl HostFacts {
    /// Probe the local system.
    #[must_use]
    pub fn gather() -> Self {
        Self {
            ipv6: std::path::Path::new("/proc/net/if_inet6").exists(),
        }
    }
}
