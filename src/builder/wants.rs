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
#![allow(clippy::module_name_repetitions)]

use crate::config::{Ensure, Protocol, Starttls, Switch};
use crate::directive::DirectiveValue;

///
pub struct WantsName(pub(crate) ());

///
pub struct WantsListen {
    #[allow(dead_code)]
    pub(crate) parent: WantsName,
    pub(super) name: String,
    pub(super) ensure: Ensure,
}

///
pub struct WantsIpv6 {
    pub(crate) parent: WantsListen,
    pub(super) listen_ip: Vec<String>,
    pub(super) listen_port: u16,
    pub(super) listen_options: Option<String>,
}

///
pub struct WantsTls {
    pub(crate) parent: WantsIpv6,
    pub(super) ipv6_enable: bool,
    pub(super) ipv6_listen_ip: Vec<String>,
    pub(super) ipv6_listen_port: Option<u16>,
    pub(super) ipv6_listen_options: String,
}

///
pub struct WantsProtocol {
    pub(crate) parent: WantsTls,
    pub(super) ssl: bool,
    pub(super) ssl_port: Option<u16>,
    pub(super) starttls: Starttls,
    pub(super) ssl_cert: Option<std::path::PathBuf>,
    pub(super) ssl_key: Option<std::path::PathBuf>,
    pub(super) ssl_ciphers: Option<String>,
    pub(super) ssl_protocols: Option<String>,
    pub(super) ssl_prefer_server_ciphers: Option<Switch>,
    pub(super) ssl_client_cert: Option<std::path::PathBuf>,
    pub(super) ssl_crl: Option<std::path::PathBuf>,
    pub(super) ssl_dhparam: Option<std::path::PathBuf>,
    pub(super) ssl_ecdh_curve: Option<String>,
    pub(super) ssl_password_file: Option<std::path::PathBuf>,
    pub(super) ssl_session_cache: Option<String>,
    pub(super) ssl_session_ticket_key: Option<std::path::PathBuf>,
    pub(super) ssl_session_tickets: Option<Switch>,
    pub(super) ssl_session_timeout: Option<String>,
    pub(super) ssl_trusted_cert: Option<std::path::PathBuf>,
    pub(super) ssl_verify_depth: Option<u32>,
}

///
pub struct WantsProxyOptions {
    pub(crate) parent: WantsProtocol,
    pub(super) protocol: Option<Protocol>,
    pub(super) auth_http: Option<String>,
    pub(super) auth_http_header: Option<String>,
    pub(super) imap_auth: Option<String>,
    pub(super) imap_capabilities: Vec<String>,
    pub(super) imap_client_buffer: Option<String>,
    pub(super) pop3_auth: Option<String>,
    pub(super) pop3_capabilities: Vec<String>,
    pub(super) smtp_auth: Option<String>,
    pub(super) smtp_capabilities: Vec<String>,
}

///
pub struct WantsServerName {
    pub(crate) parent: WantsProxyOptions,
    pub(super) xclient: Switch,
    pub(super) proxy_protocol: Switch,
    pub(super) proxy_smtp_auth: Switch,
    pub(super) proxy_pass_error_message: String,
}

///
pub struct WantsRawBlocks {
    pub(crate) parent: WantsServerName,
    pub(super) server_name: Option<Vec<String>>,
}

///
pub struct WantsValidate {
    pub(crate) parent: WantsRawBlocks,
    pub(super) raw_prepend: Vec<String>,
    pub(super) raw_append: Vec<String>,
    pub(super) cfg_prepend: std::collections::BTreeMap<String, DirectiveValue>,
    pub(super) cfg_append: std::collections::BTreeMap<String, DirectiveValue>,
}
