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
use crate::{
    builder::{wants::WantsName, with::Builder},
    config::{Ensure, FieldHost, FieldSsl, Protocol, Starttls, Switch},
    directive::DirectiveValue,
    fact::HostFacts,
    log_channel,
};

/// Errors that abort the convergence of one resource.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// TLS material must be complete as soon as any TLS surface is enabled.
    #[error(
        "host '{name}': TLS is enabled (`ssl` or `starttls`) but `ssl_cert` and `ssl_key` are not both provided"
    )]
    MissingTlsMaterial {
        /// name of the offending host
        name: String,
    },
    /// The base proxy configuration is a hard prerequisite of any rendering.
    #[error("base proxy configuration not found at '{}'", path.display())]
    BaseConfigMissing {
        /// expected configuration directory
        path: std::path::PathBuf,
    },
}

/// One validated mail host, immutable for the rest of the run.
///
/// All defaulting is resolved here: scalar-or-list fields are lists,
/// `server_name` is never empty, the TLS fallbacks from the global `[ssl]`
/// table are applied, and `ipv6_listen_ip` holds the *effective* list
/// (empty whenever IPv6 is disabled or unsupported on the machine).
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Mailhost {
    pub name: String,
    pub ensure: Ensure,
    pub listen_ip: Vec<String>,
    pub listen_port: u16,
    pub listen_options: Option<String>,
    pub ipv6_listen_ip: Vec<String>,
    pub ipv6_listen_port: u16,
    pub ipv6_listen_options: String,
    pub ssl: bool,
    pub ssl_port: Option<u16>,
    pub starttls: Starttls,
    pub ssl_cert: Option<std::path::PathBuf>,
    pub ssl_key: Option<std::path::PathBuf>,
    pub ssl_ciphers: String,
    pub ssl_protocols: String,
    pub ssl_prefer_server_ciphers: Switch,
    pub ssl_client_cert: Option<std::path::PathBuf>,
    pub ssl_crl: Option<std::path::PathBuf>,
    pub ssl_dhparam: Option<std::path::PathBuf>,
    pub ssl_ecdh_curve: Option<String>,
    pub ssl_password_file: Option<std::path::PathBuf>,
    pub ssl_session_cache: Option<String>,
    pub ssl_session_ticket_key: Option<std::path::PathBuf>,
    pub ssl_session_tickets: Option<Switch>,
    pub ssl_session_timeout: Option<String>,
    pub ssl_trusted_cert: Option<std::path::PathBuf>,
    pub ssl_verify_depth: Option<u32>,
    pub protocol: Option<Protocol>,
    pub auth_http: Option<String>,
    pub auth_http_header: Option<String>,
    pub xclient: Switch,
    pub proxy_protocol: Switch,
    pub proxy_smtp_auth: Switch,
    pub proxy_pass_error_message: String,
    pub imap_auth: Option<String>,
    pub imap_capabilities: Vec<String>,
    pub imap_client_buffer: Option<String>,
    pub pop3_auth: Option<String>,
    pub pop3_capabilities: Vec<String>,
    pub smtp_auth: Option<String>,
    pub smtp_capabilities: Vec<String>,
    pub server_name: Vec<String>,
    pub raw_prepend: Vec<String>,
    pub raw_append: Vec<String>,
    pub cfg_prepend: std::collections::BTreeMap<String, DirectiveValue>,
    pub cfg_append: std::collections::BTreeMap<String, DirectiveValue>,
}

impl Mailhost {
    ///
    #[must_use]
    pub const fn builder() -> Builder<WantsName> {
        Builder {
            state: WantsName(()),
        }
    }

    /// Run the cross-field checks and resolve every derived value.
    ///
    /// `facts` is an input on purpose: callers rendering for another machine
    /// hand in that machine's facts instead of the local ones.
    ///
    /// # Errors
    ///
    /// * TLS is enabled but the certificate or the private key is missing
    pub fn validate(
        name: &str,
        field: FieldHost,
        ssl_defaults: &FieldSsl,
        facts: &HostFacts,
    ) -> Result<Self, ValidationError> {
        if (field.ssl || field.starttls.is_enabled())
            && (field.ssl_cert.is_none() || field.ssl_key.is_none())
        {
            return Err(ValidationError::MissingTlsMaterial {
                name: name.to_string(),
            });
        }

        let ipv6_listen_ip = if !field.ipv6_enable {
            vec![]
        } else if facts.ipv6 {
            field.ipv6_listen_ip.clone()
        } else {
            log::warn!(
                target: log_channel::VALIDATE,
                "host '{name}': IPv6 listeners requested but the machine has no IPv6 support, skipping them"
            );
            vec![]
        };

        // a TLS port is meaningless without a TLS listener; conversely a TLS
        // listener without a dedicated port takes the plain one over
        let ssl_port = if field.ssl {
            field.ssl_port.map_or_else(
                || {
                    log::warn!(
                        target: log_channel::VALIDATE,
                        "host '{name}': `ssl` is enabled without `ssl_port`, the TLS block takes over port {}",
                        field.listen_port
                    );
                    Some(field.listen_port)
                },
                Some,
            )
        } else {
            None
        };

        let server_name = field
            .server_name
            .filter(|names| !names.is_empty())
            .unwrap_or_else(|| vec![name.to_string()]);

        Ok(Self {
            name: name.to_string(),
            ensure: field.ensure,
            listen_ip: field.listen_ip,
            listen_port: field.listen_port,
            listen_options: field.listen_options,
            ipv6_listen_ip,
            ipv6_listen_port: field.ipv6_listen_port.unwrap_or(field.listen_port),
            ipv6_listen_options: field.ipv6_listen_options,
            ssl: field.ssl,
            ssl_port,
            starttls: field.starttls,
            ssl_cert: field.ssl_cert,
            ssl_key: field.ssl_key,
            ssl_ciphers: field
                .ssl_ciphers
                .unwrap_or_else(|| ssl_defaults.ciphers.clone()),
            ssl_protocols: field
                .ssl_protocols
                .unwrap_or_else(|| ssl_defaults.protocols.clone()),
            ssl_prefer_server_ciphers: field
                .ssl_prefer_server_ciphers
                .unwrap_or(ssl_defaults.prefer_server_ciphers),
            ssl_client_cert: field.ssl_client_cert,
            ssl_crl: field.ssl_crl,
            ssl_dhparam: field.ssl_dhparam,
            ssl_ecdh_curve: field.ssl_ecdh_curve,
            ssl_password_file: field.ssl_password_file,
            ssl_session_cache: field.ssl_session_cache,
            ssl_session_ticket_key: field.ssl_session_ticket_key,
            ssl_session_tickets: field.ssl_session_tickets,
            ssl_session_timeout: field.ssl_session_timeout,
            ssl_trusted_cert: field.ssl_trusted_cert,
            ssl_verify_depth: field.ssl_verify_depth,
            protocol: field.protocol,
            auth_http: field.auth_http,
            auth_http_header: field.auth_http_header,
            xclient: field.xclient,
            proxy_protocol: field.proxy_protocol,
            proxy_smtp_auth: field.proxy_smtp_auth,
            proxy_pass_error_message: field.proxy_pass_error_message,
            imap_auth: field.imap_auth,
            imap_capabilities: field.imap_capabilities,
            imap_client_buffer: field.imap_client_buffer,
            pop3_auth: field.pop3_auth,
            pop3_capabilities: field.pop3_capabilities,
            smtp_auth: field.smtp_auth,
            smtp_capabilities: field.smtp_capabilities,
            server_name,
            raw_prepend: field.raw_prepend,
            raw_append: field.raw_append,
            cfg_prepend: field.mailhost_cfg_prepend,
            cfg_append: field.mailhost_cfg_append,
        })
    }
}
