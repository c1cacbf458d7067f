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
#![allow(clippy::use_self)] // false positive
#![allow(missing_docs)]

use crate::directive::DirectiveValue;

///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(
        serialize_with = "crate::parser::semver::serialize",
        deserialize_with = "crate::parser::semver::deserialize"
    )]
    pub version_requirement: semver::VersionReq,
    #[serde(default)]
    pub proxy: FieldProxy,
    #[serde(default)]
    pub logs: FieldLogs,
    #[serde(default)]
    pub ssl: FieldSsl,
    #[serde(default)]
    pub hosts: std::collections::BTreeMap<String, FieldHost>,
}

impl Config {
    /// Parse a [`Config`] with [TOML] format
    ///
    /// # Errors
    ///
    /// * data is not a valid [TOML]
    /// * one field is unknown
    /// * the version requirement are not fulfilled
    /// * a mandatory field is not provided (no default value)
    ///
    /// [TOML]: https://github.com/toml-lang/toml
    pub fn from_toml(input: &str) -> anyhow::Result<Self> {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct VersionRequirement {
            #[serde(
                serialize_with = "crate::parser::semver::serialize",
                deserialize_with = "crate::parser::semver::deserialize"
            )]
            version_requirement: semver::VersionReq,
        }

        let req = toml::from_str::<VersionRequirement>(input)?;
        let pkg_version = semver::Version::parse(env!("CARGO_PKG_VERSION"))?;

        if !req.version_requirement.matches(&pkg_version) {
            anyhow::bail!(
                "Version requirement not fulfilled: expected '{}' but got '{}'",
                req.version_requirement,
                env!("CARGO_PKG_VERSION")
            );
        }

        toml::from_str::<Self>(input).map_err(anyhow::Error::new)
    }
}

/// Settings of the proxy installation the rendered files are handed to.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldProxy {
    #[serde(default = "FieldProxy::default_conf_dir")]
    pub conf_dir: std::path::PathBuf,
    #[serde(default)]
    #[serde(
        serialize_with = "crate::parser::syst_user::opt_serialize",
        deserialize_with = "crate::parser::syst_user::opt_deserialize"
    )]
    pub user: Option<users::User>,
    #[serde(default)]
    #[serde(
        serialize_with = "crate::parser::syst_group::opt_serialize",
        deserialize_with = "crate::parser::syst_group::opt_deserialize"
    )]
    pub group: Option<users::Group>,
    #[serde(default = "FieldProxy::default_mode")]
    #[serde(
        serialize_with = "crate::parser::file_mode::serialize",
        deserialize_with = "crate::parser::file_mode::deserialize"
    )]
    pub mode: u32,
    pub reload: Option<FieldProxyReload>,
}

impl PartialEq for FieldProxy {
    fn eq(&self, other: &Self) -> bool {
        self.conf_dir == other.conf_dir
            && self.user.as_ref().map(users::User::uid) == other.user.as_ref().map(users::User::uid)
            && self.group.as_ref().map(users::Group::gid)
                == other.group.as_ref().map(users::Group::gid)
            && self.mode == other.mode
            && self.reload == other.reload
    }
}

impl Eq for FieldProxy {}

/// Subprocess notified when any managed file changed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldProxyReload {
    /// the command to execute in the subprocess
    pub command: String,
    /// optional: parameters directly given to the executed program (argc, argv)
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldLogs {
    #[serde(default)]
    pub filepath: Option<std::path::PathBuf>,
    #[serde(default = "FieldLogs::default_format")]
    pub format: String,
    #[serde(default = "FieldLogs::default_level")]
    pub level: std::collections::BTreeMap<String, log::LevelFilter>,
}

/// TLS values a host falls back to when it does not carry its own.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSsl {
    #[serde(default = "FieldSsl::default_ciphers")]
    pub ciphers: String,
    #[serde(default = "FieldSsl::default_protocols")]
    pub protocols: String,
    #[serde(default = "FieldSsl::default_prefer_server_ciphers")]
    pub prefer_server_ciphers: Switch,
}

/// Whether the rendered file for a host exists at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Ensure {
    #[serde(rename = "present")]
    Present,
    #[serde(rename = "absent")]
    Absent,
}

/// A two-state proxy directive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Switch {
    #[serde(rename = "on")]
    On,
    #[serde(rename = "off")]
    Off,
}

impl Switch {
    /// return the enum as a static slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Switch::On => "on",
            Switch::Off => "off",
        }
    }
}

impl std::fmt::Display for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a plaintext connection may upgrade to TLS within the mail session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Starttls {
    /// upgrade offered, plaintext transactions still accepted
    #[serde(rename = "on")]
    On,
    /// no upgrade offered
    #[serde(rename = "off")]
    Off,
    /// upgrade required before any transaction
    #[serde(rename = "only")]
    Only,
}

impl Starttls {
    /// return the enum as a static slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Starttls::On => "on",
            Starttls::Off => "off",
            Starttls::Only => "only",
        }
    }

    /// the host exposes a STARTTLS surface, whichever the flavor.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Starttls::Off)
    }
}

impl std::fmt::Display for Starttls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mail protocol proxied by a host block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Protocol {
    #[serde(rename = "imap")]
    Imap,
    #[serde(rename = "pop3")]
    Pop3,
    #[serde(rename = "sieve")]
    Sieve,
    #[serde(rename = "smtp")]
    Smtp,
}

impl Protocol {
    /// return the enum as a static slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Protocol::Imap => "imap",
            Protocol::Pop3 => "pop3",
            Protocol::Sieve => "sieve",
            Protocol::Smtp => "smtp",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The raw parameter record of one declared mail host.
///
/// Scalar-or-list fields (`listen_ip`, `ipv6_listen_ip`, `raw_prepend`,
/// `raw_append`) accept a single string and coerce it to a one-element list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldHost {
    #[serde(default = "FieldHost::default_ensure")]
    pub ensure: Ensure,
    #[serde(
        default = "FieldHost::default_listen_ip",
        deserialize_with = "crate::parser::one_or_many::deserialize"
    )]
    pub listen_ip: Vec<String>,
    pub listen_port: u16,
    pub listen_options: Option<String>,
    #[serde(default)]
    pub ipv6_enable: bool,
    #[serde(
        default = "FieldHost::default_ipv6_listen_ip",
        deserialize_with = "crate::parser::one_or_many::deserialize"
    )]
    pub ipv6_listen_ip: Vec<String>,
    pub ipv6_listen_port: Option<u16>,
    #[serde(default = "FieldHost::default_ipv6_listen_options")]
    pub ipv6_listen_options: String,
    #[serde(default)]
    pub ssl: bool,
    pub ssl_cert: Option<std::path::PathBuf>,
    pub ssl_key: Option<std::path::PathBuf>,
    pub ssl_port: Option<u16>,
    pub ssl_ciphers: Option<String>,
    pub ssl_client_cert: Option<std::path::PathBuf>,
    pub ssl_crl: Option<std::path::PathBuf>,
    pub ssl_dhparam: Option<std::path::PathBuf>,
    pub ssl_ecdh_curve: Option<String>,
    pub ssl_password_file: Option<std::path::PathBuf>,
    pub ssl_prefer_server_ciphers: Option<Switch>,
    pub ssl_protocols: Option<String>,
    pub ssl_session_cache: Option<String>,
    pub ssl_session_ticket_key: Option<std::path::PathBuf>,
    pub ssl_session_tickets: Option<Switch>,
    pub ssl_session_timeout: Option<String>,
    pub ssl_trusted_cert: Option<std::path::PathBuf>,
    pub ssl_verify_depth: Option<u32>,
    #[serde(default = "FieldHost::default_starttls")]
    pub starttls: Starttls,
    pub protocol: Option<Protocol>,
    pub auth_http: Option<String>,
    // opaque, handed to the proxy untouched
    pub auth_http_header: Option<String>,
    #[serde(default = "FieldHost::default_xclient")]
    pub xclient: Switch,
    #[serde(default = "FieldHost::default_proxy_protocol")]
    pub proxy_protocol: Switch,
    #[serde(default = "FieldHost::default_proxy_smtp_auth")]
    pub proxy_smtp_auth: Switch,
    pub imap_auth: Option<String>,
    #[serde(default)]
    pub imap_capabilities: Vec<String>,
    // opaque, handed to the proxy untouched
    pub imap_client_buffer: Option<String>,
    pub pop3_auth: Option<String>,
    #[serde(default)]
    pub pop3_capabilities: Vec<String>,
    pub smtp_auth: Option<String>,
    #[serde(default)]
    pub smtp_capabilities: Vec<String>,
    #[serde(default = "FieldHost::default_proxy_pass_error_message")]
    pub proxy_pass_error_message: String,
    pub server_name: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "crate::parser::one_or_many::deserialize"
    )]
    pub raw_prepend: Vec<String>,
    #[serde(
        default,
        deserialize_with = "crate::parser::one_or_many::deserialize"
    )]
    pub raw_append: Vec<String>,
    #[serde(default)]
    pub mailhost_cfg_prepend: std::collections::BTreeMap<String, DirectiveValue>,
    #[serde(default)]
    pub mailhost_cfg_append: std::collections::BTreeMap<String, DirectiveValue>,
}
