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
use crate::config::{
    Config, Ensure, FieldHost, FieldLogs, FieldProxy, FieldSsl, Starttls, Switch,
};

impl Default for Config {
    fn default() -> Self {
        Self {
            version_requirement: semver::VersionReq::STAR,
            proxy: FieldProxy::default(),
            logs: FieldLogs::default(),
            ssl: FieldSsl::default(),
            hosts: std::collections::BTreeMap::new(),
        }
    }
}

impl Default for FieldProxy {
    fn default() -> Self {
        Self {
            conf_dir: Self::default_conf_dir(),
            user: None,
            group: None,
            mode: Self::default_mode(),
            reload: None,
        }
    }
}

impl FieldProxy {
    pub(crate) fn default_conf_dir() -> std::path::PathBuf {
        "/etc/nginx".into()
    }

    pub(crate) const fn default_mode() -> u32 {
        0o644
    }
}

impl Default for FieldLogs {
    fn default() -> Self {
        Self {
            filepath: None,
            format: Self::default_format(),
            level: Self::default_level(),
        }
    }
}

impl FieldLogs {
    pub(crate) fn default_format() -> String {
        "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}".to_string()
    }

    pub(crate) fn default_level() -> std::collections::BTreeMap<String, log::LevelFilter> {
        std::collections::BTreeMap::new()
    }
}

impl Default for FieldSsl {
    fn default() -> Self {
        Self {
            ciphers: Self::default_ciphers(),
            protocols: Self::default_protocols(),
            prefer_server_ciphers: Self::default_prefer_server_ciphers(),
        }
    }
}

impl FieldSsl {
    pub(crate) fn default_ciphers() -> String {
        "HIGH:!aNULL:!MD5".to_string()
    }

    pub(crate) fn default_protocols() -> String {
        "TLSv1.2 TLSv1.3".to_string()
    }

    pub(crate) const fn default_prefer_server_ciphers() -> Switch {
        Switch::On
    }
}

impl FieldHost {
    pub(crate) const fn default_ensure() -> Ensure {
        Ensure::Present
    }

    pub(crate) fn default_listen_ip() -> Vec<String> {
        vec!["*".to_string()]
    }

    pub(crate) fn default_ipv6_listen_ip() -> Vec<String> {
        vec!["::".to_string()]
    }

    pub(crate) fn default_ipv6_listen_options() -> String {
        "default ipv6only=on".to_string()
    }

    pub(crate) const fn default_starttls() -> Starttls {
        Starttls::Off
    }

    pub(crate) const fn default_xclient() -> Switch {
        Switch::On
    }

    pub(crate) const fn default_proxy_protocol() -> Switch {
        Switch::Off
    }

    pub(crate) const fn default_proxy_smtp_auth() -> Switch {
        Switch::Off
    }

    pub(crate) fn default_proxy_pass_error_message() -> String {
        "off".to_string()
    }
}
