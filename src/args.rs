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

///
#[derive(clap::Parser)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
#[clap(about, version, author)]
pub struct Args {
    /// Path of the vMailhost configuration file (toml format)
    #[clap(short, long)]
    pub config: Option<String>,

    ///
    #[clap(subcommand)]
    pub command: Commands,
}

///
#[derive(clap::Subcommand)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub enum Commands {
    /// Render every declared mail host and converge the managed files
    Apply {
        /// Print what would change without writing anything
        #[clap(long)]
        check: bool,
    },
    /// Print the rendered configuration of one declared host
    Show {
        /// Name of the declared host
        host: String,
    },
}
