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
use crate::config::{FieldHost, FieldSsl};
use crate::fact::HostFacts;
use crate::mailhost::{Mailhost, ValidationError};

use super::{wants::WantsValidate, with::Builder};

impl Builder<WantsValidate> {
    /// Assemble the parameter record and run the cross-field checks.
    ///
    /// # Errors
    ///
    /// * TLS is enabled but the certificate or the private key is missing
    pub fn validate(
        self,
        ssl_defaults: &FieldSsl,
        facts: &HostFacts,
    ) -> Result<Mailhost, ValidationError> {
        let raw = self.state;
        let names = raw.parent;
        let proxy = names.parent;
        let proto = proxy.parent;
        let tls = proto.parent;
        let ipv6 = tls.parent;
        let listen = ipv6.parent;
        let host = listen.parent;

        let field = FieldHost {
            ensure: host.ensure,
            listen_ip: listen.listen_ip,
            listen_port: listen.listen_port,
            listen_options: listen.listen_options,
            ipv6_enable: ipv6.ipv6_enable,
            ipv6_listen_ip: ipv6.ipv6_listen_ip,
            ipv6_listen_port: ipv6.ipv6_listen_port,
            ipv6_listen_options: ipv6.ipv6_listen_options,
            ssl: tls.ssl,
            ssl_cert: tls.ssl_cert,
            ssl_key: tls.ssl_key,
            ssl_port: tls.ssl_port,
            ssl_ciphers: tls.ssl_ciphers,
            ssl_client_cert: tls.ssl_client_cert,
            ssl_crl: tls.ssl_crl,
            ssl_dhparam: tls.ssl_dhparam,
            ssl_ecdh_curve: tls.ssl_ecdh_curve,
            ssl_password_file: tls.ssl_password_file,
            ssl_prefer_server_ciphers: tls.ssl_prefer_server_ciphers,
            ssl_protocols: tls.ssl_protocols,
            ssl_session_cache: tls.ssl_session_cache,
            ssl_session_ticket_key: tls.ssl_session_ticket_key,
            ssl_session_tickets: tls.ssl_session_tickets,
            ssl_session_timeout: tls.ssl_session_timeout,
            ssl_trusted_cert: tls.ssl_trusted_cert,
            ssl_verify_depth: tls.ssl_verify_depth,
            starttls: tls.starttls,
            protocol: proto.protocol,
            auth_http: proto.auth_http,
            auth_http_header: proto.auth_http_header,
            xclient: proxy.xclient,
            proxy_protocol: proxy.proxy_protocol,
            proxy_smtp_auth: proxy.proxy_smtp_auth,
            imap_auth: proto.imap_auth,
            imap_capabilities: proto.imap_capabilities,
            imap_client_buffer: proto.imap_client_buffer,
            pop3_auth: proto.pop3_auth,
            pop3_capabilities: proto.pop3_capabilities,
            smtp_auth: proto.smtp_auth,
            smtp_capabilities: proto.smtp_capabilities,
            proxy_pass_error_message: proxy.proxy_pass_error_message,
            server_name: names.server_name,
            raw_prepend: raw.raw_prepend,
            raw_append: raw.raw_append,
            mailhost_cfg_prepend: raw.cfg_prepend,
            mailhost_cfg_append: raw.cfg_append,
        };

        Mailhost::validate(&host.name, field, ssl_defaults, facts)
    }
}
