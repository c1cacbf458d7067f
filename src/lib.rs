//! vMailhost configuration rendering

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
//
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
//
#![allow(clippy::doc_markdown)]

/**
 * vMailhost mail proxy configuration renderer
 * Copyright (C) 2026 Team vMailhost
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or any later version.
 *
 *  This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program. If not, see https://www.gnu.org/licenses/.
 *
**/

/// targets for log! macro
pub mod log_channel {
    /// parameter validation
    pub const VALIDATE: &str = "validate";
    /// fragment planning and text rendering
    pub const RENDER: &str = "render";
    /// managed file output and service reload
    pub const OUTPUT: &str = "output";
}

#[cfg(test)]
mod tests;

mod parser {
    pub mod file_mode;
    pub mod one_or_many;
    pub mod semver;
    pub mod syst_group;
    pub mod syst_user;
}

mod builder {
    ///
    pub mod validate;

    ///
    pub mod wants;

    ///
    pub mod with;
}

mod args;
mod concat;
mod config;
mod default;
mod directive;
mod fact;
mod mailhost;
mod plan;
mod render;

pub use args::{Args, Commands};
pub use builder::{wants::*, with::Builder};
pub use concat::{ConcatFile, Outcome};
pub use config::{
    Config, Ensure, FieldHost, FieldLogs, FieldProxy, FieldProxyReload, FieldSsl, Protocol,
    Starttls, Switch,
};
pub use directive::{BlockEntry, DirectiveValue};
pub use fact::HostFacts;
pub use mailhost::{Mailhost, ValidationError};
pub use plan::{plan, Fragment, OrderKey};
pub use render::{render_fragments, Render, Section, Template, TextRenderer};

#[doc(hidden)]
#[allow(clippy::module_name_repetitions)]
pub fn get_logger_config(config: &Config) -> anyhow::Result<log4rs::Config> {
    use log4rs::{append, config, encode, Config};

    let stdout = append::console::ConsoleAppender::builder()
        .encoder(Box::new(encode::pattern::PatternEncoder::new(
            &config.logs.format,
        )))
        .build();

    let mut builder =
        Config::builder().appender(config::Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = config::Root::builder().appender("stdout");

    if let Some(filepath) = &config.logs.filepath {
        let file = append::file::FileAppender::builder()
            .encoder(Box::new(encode::pattern::PatternEncoder::new(
                &config.logs.format,
            )))
            .build(filepath)?;
        builder = builder.appender(config::Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    builder
        .loggers(
            config
                .logs
                .level
                .iter()
                .filter(|(name, _)| name.as_str() != "default")
                .map(|(name, level)| config::Logger::builder().build(name, *level)),
        )
        .build(
            root.build(
                *config
                    .logs
                    .level
                    .get("default")
                    .unwrap_or(&log::LevelFilter::Warn),
            ),
        )
        .map_err(|e| {
            e.errors().iter().for_each(|e| log::error!("{}", e));
            anyhow::anyhow!(e)
        })
}
