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
use crate::mailhost::Mailhost;
use crate::render::Template;

/// Sort key of a fragment inside the concatenated output file.
///
/// Keys compare byte-wise, case-sensitive: `"001" < "700"`, whatever the
/// declaration order of the fragments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderKey(String);

impl OrderKey {
    ///
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// the plaintext (or STARTTLS) server block
    #[must_use]
    pub fn header() -> Self {
        Self::new("001")
    }

    /// the dedicated TLS server block, after the header
    #[must_use]
    pub fn ssl() -> Self {
        Self::new("700")
    }

    ///
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One not-yet-rendered chunk of a host's configuration file.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// where the rendered text sorts in the output file
    pub order: OrderKey,
    /// which text template produces it
    pub template: Template,
    /// the validated host handed to the renderer, shared between fragments
    pub host: std::sync::Arc<Mailhost>,
}

/// Decide which fragments a host produces, and in what order.
///
/// The context is built once and shared by every fragment. When the plain
/// and TLS listeners share one port, only the TLS block is emitted: two
/// blocks would otherwise claim the same `listen` directive.
#[must_use]
pub fn plan(host: &Mailhost) -> Vec<Fragment> {
    let context = std::sync::Arc::new(host.clone());
    let mut fragments = Vec::with_capacity(2);

    if host.ssl_port.map_or(true, |ssl_port| ssl_port != host.listen_port) {
        fragments.push(Fragment {
            order: OrderKey::header(),
            template: Template::Mailhost,
            host: std::sync::Arc::clone(&context),
        });
    }

    if host.ssl {
        fragments.push(Fragment {
            order: OrderKey::ssl(),
            template: Template::MailhostSsl,
            host: context,
        });
    }

    fragments
}
