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
use anyhow::Context;

use crate::config::{Ensure, FieldProxy};
use crate::log_channel;
use crate::plan::OrderKey;

/// What one convergence did to a managed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// content already up to date, nothing written
    Unchanged,
    /// file created or rewritten
    Written,
    /// `ensure = absent`, file deleted
    Removed,
}

/// One managed configuration file, assembled from ordered fragments.
///
/// Exclusively owned by the host it was created for; applying the same
/// fragments twice writes once.
#[derive(Debug)]
pub struct ConcatFile {
    path: std::path::PathBuf,
    user: Option<users::User>,
    group: Option<users::Group>,
    mode: u32,
}

impl ConcatFile {
    /// The file managed for `name` under the proxy configuration directory.
    #[must_use]
    pub fn new(name: &str, proxy: &FieldProxy) -> Self {
        Self {
            path: proxy
                .conf_dir
                .join("conf.mail.d")
                .join(format!("{name}.conf")),
            user: proxy.user.clone(),
            group: proxy.group.clone(),
            mode: proxy.mode,
        }
    }

    ///
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Concatenate rendered fragments by ascending order key.
    ///
    /// The sort is stable: fragments sharing a key keep their declaration
    /// order.
    #[must_use]
    pub fn assemble(mut rendered: Vec<(OrderKey, String)>) -> String {
        rendered.sort_by(|(left, _), (right, _)| left.cmp(right));
        rendered.into_iter().map(|(_, text)| text).collect()
    }

    /// Converge the file on disk towards `rendered`.
    ///
    /// # Errors
    ///
    /// * the file or its directory cannot be written, removed or chowned
    pub fn apply(
        &self,
        ensure: Ensure,
        rendered: Vec<(OrderKey, String)>,
    ) -> anyhow::Result<Outcome> {
        if ensure == Ensure::Absent {
            if !self.path.exists() {
                return Ok(Outcome::Unchanged);
            }
            std::fs::remove_file(&self.path)
                .with_context(|| format!("cannot remove '{}'", self.path.display()))?;
            log::info!(
                target: log_channel::OUTPUT,
                "removed '{}'",
                self.path.display()
            );
            return Ok(Outcome::Removed);
        }

        let content = Self::assemble(rendered);
        if matches!(std::fs::read_to_string(&self.path), Ok(existing) if existing == content) {
            return Ok(Outcome::Unchanged);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create '{}'", parent.display()))?;
        }
        std::fs::write(&self.path, &content)
            .with_context(|| format!("cannot write '{}'", self.path.display()))?;

        self.apply_ownership()?;

        log::info!(
            target: log_channel::OUTPUT,
            "wrote '{}' ({} bytes)",
            self.path.display(),
            content.len()
        );
        Ok(Outcome::Written)
    }

    fn apply_ownership(&self) -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(self.mode))
            .with_context(|| format!("cannot set mode on '{}'", self.path.display()))?;

        if self.user.is_some() || self.group.is_some() {
            std::os::unix::fs::chown(
                &self.path,
                self.user.as_ref().map(users::User::uid),
                self.group.as_ref().map(users::Group::gid),
            )
            .with_context(|| format!("cannot chown '{}'", self.path.display()))?;
        }
        Ok(())
    }
}
