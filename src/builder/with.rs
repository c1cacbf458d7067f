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
use crate::config::{Ensure, FieldHost, Protocol, Starttls, Switch};
use crate::directive::DirectiveValue;

use super::wants::{
    WantsIpv6, WantsListen, WantsName, WantsProtocol, WantsProxyOptions, WantsRawBlocks,
    WantsServerName, WantsTls, WantsValidate,
};

///
pub struct Builder<State> {
    pub(crate) state: State,
}

impl Builder<WantsName> {
    ///
    #[must_use]
    pub fn with_name(self, name: &str) -> Builder<WantsListen> {
        self.with_name_and_ensure(name, Ensure::Present)
    }

    ///
    #[allow(clippy::missing_const_for_fn)]
    #[must_use]
    pub fn with_name_and_ensure(self, name: &str, ensure: Ensure) -> Builder<WantsListen> {
        Builder::<WantsListen> {
            state: WantsListen {
                parent: self.state,
                name: name.to_string(),
                ensure,
            },
        }
    }
}

impl Builder<WantsListen> {
    /// Listen on every address (`*`) with no extra listen options.
    #[must_use]
    pub fn with_listen_port(self, listen_port: u16) -> Builder<WantsIpv6> {
        self.with_listen(&["*"], listen_port, None)
    }

    ///
    #[must_use]
    pub fn with_listen(
        self,
        listen_ip: &[&str],
        listen_port: u16,
        listen_options: Option<&str>,
    ) -> Builder<WantsIpv6> {
        Builder::<WantsIpv6> {
            state: WantsIpv6 {
                parent: self.state,
                listen_ip: listen_ip.iter().map(ToString::to_string).collect(),
                listen_port,
                listen_options: listen_options.map(ToString::to_string),
            },
        }
    }
}

impl Builder<WantsIpv6> {
    ///
    #[must_use]
    pub fn without_ipv6(self) -> Builder<WantsTls> {
        Builder::<WantsTls> {
            state: WantsTls {
                parent: self.state,
                ipv6_enable: false,
                ipv6_listen_ip: FieldHost::default_ipv6_listen_ip(),
                ipv6_listen_port: None,
                ipv6_listen_options: FieldHost::default_ipv6_listen_options(),
            },
        }
    }

    /// Listen on `[::]` with the default listen options, same port as IPv4.
    #[must_use]
    pub fn with_default_ipv6(self) -> Builder<WantsTls> {
        Builder::<WantsTls> {
            state: WantsTls {
                parent: self.state,
                ipv6_enable: true,
                ipv6_listen_ip: FieldHost::default_ipv6_listen_ip(),
                ipv6_listen_port: None,
                ipv6_listen_options: FieldHost::default_ipv6_listen_options(),
            },
        }
    }

    ///
    #[must_use]
    pub fn with_ipv6_listen(
        self,
        ipv6_listen_ip: &[&str],
        ipv6_listen_port: Option<u16>,
        ipv6_listen_options: &str,
    ) -> Builder<WantsTls> {
        Builder::<WantsTls> {
            state: WantsTls {
                parent: self.state,
                ipv6_enable: true,
                ipv6_listen_ip: ipv6_listen_ip.iter().map(ToString::to_string).collect(),
                ipv6_listen_port,
                ipv6_listen_options: ipv6_listen_options.to_string(),
            },
        }
    }
}

impl Builder<WantsTls> {
    fn tls_stage(
        self,
        ssl: bool,
        ssl_port: Option<u16>,
        starttls: Starttls,
        ssl_cert: Option<std::path::PathBuf>,
        ssl_key: Option<std::path::PathBuf>,
    ) -> Builder<WantsProtocol> {
        Builder::<WantsProtocol> {
            state: WantsProtocol {
                parent: self.state,
                ssl,
                ssl_port,
                starttls,
                ssl_cert,
                ssl_key,
                ssl_ciphers: None,
                ssl_protocols: None,
                ssl_prefer_server_ciphers: None,
                ssl_client_cert: None,
                ssl_crl: None,
                ssl_dhparam: None,
                ssl_ecdh_curve: None,
                ssl_password_file: None,
                ssl_session_cache: None,
                ssl_session_ticket_key: None,
                ssl_session_tickets: None,
                ssl_session_timeout: None,
                ssl_trusted_cert: None,
                ssl_verify_depth: None,
            },
        }
    }

    ///
    #[must_use]
    pub fn without_tls(self) -> Builder<WantsProtocol> {
        self.tls_stage(false, None, Starttls::Off, None, None)
    }

    /// Offer STARTTLS on the plain listener.
    #[must_use]
    pub fn with_starttls(self, ssl_cert: &str, ssl_key: &str) -> Builder<WantsProtocol> {
        self.tls_stage(
            false,
            None,
            Starttls::On,
            Some(ssl_cert.into()),
            Some(ssl_key.into()),
        )
    }

    /// Require STARTTLS before any transaction on the plain listener.
    #[must_use]
    pub fn with_starttls_only(self, ssl_cert: &str, ssl_key: &str) -> Builder<WantsProtocol> {
        self.tls_stage(
            false,
            None,
            Starttls::Only,
            Some(ssl_cert.into()),
            Some(ssl_key.into()),
        )
    }

    /// Add a dedicated TLS listener on `ssl_port`.
    #[must_use]
    pub fn with_tls(self, ssl_port: u16, ssl_cert: &str, ssl_key: &str) -> Builder<WantsProtocol> {
        self.tls_stage(
            true,
            Some(ssl_port),
            Starttls::Off,
            Some(ssl_cert.into()),
            Some(ssl_key.into()),
        )
    }

    /// Dedicated TLS listener plus a required STARTTLS upgrade on the plain one.
    #[must_use]
    pub fn with_tls_and_starttls_only(
        self,
        ssl_port: u16,
        ssl_cert: &str,
        ssl_key: &str,
    ) -> Builder<WantsProtocol> {
        self.tls_stage(
            true,
            Some(ssl_port),
            Starttls::Only,
            Some(ssl_cert.into()),
            Some(ssl_key.into()),
        )
    }
}

impl Builder<WantsProtocol> {
    /// Override the cipher list inherited from the global `[ssl]` table.
    #[must_use]
    pub fn with_ssl_ciphers(mut self, ssl_ciphers: &str) -> Self {
        self.state.ssl_ciphers = Some(ssl_ciphers.to_string());
        self
    }

    /// Override the protocol list inherited from the global `[ssl]` table.
    #[must_use]
    pub fn with_ssl_protocols(mut self, ssl_protocols: &str) -> Self {
        self.state.ssl_protocols = Some(ssl_protocols.to_string());
        self
    }

    ///
    #[must_use]
    pub fn without_protocol(self) -> Builder<WantsProxyOptions> {
        self.protocol_stage(None, None)
    }

    ///
    #[must_use]
    pub fn with_protocol(self, protocol: Protocol) -> Builder<WantsProxyOptions> {
        self.protocol_stage(Some(protocol), None)
    }

    ///
    #[must_use]
    pub fn with_protocol_and_auth(
        self,
        protocol: Protocol,
        auth_http: &str,
    ) -> Builder<WantsProxyOptions> {
        self.protocol_stage(Some(protocol), Some(auth_http.to_string()))
    }

    fn protocol_stage(
        self,
        protocol: Option<Protocol>,
        auth_http: Option<String>,
    ) -> Builder<WantsProxyOptions> {
        Builder::<WantsProxyOptions> {
            state: WantsProxyOptions {
                parent: self.state,
                protocol,
                auth_http,
                auth_http_header: None,
                imap_auth: None,
                imap_capabilities: vec![],
                imap_client_buffer: None,
                pop3_auth: None,
                pop3_capabilities: vec![],
                smtp_auth: None,
                smtp_capabilities: vec![],
            },
        }
    }
}

impl Builder<WantsProxyOptions> {
    ///
    #[must_use]
    pub fn with_default_proxy_options(self) -> Builder<WantsServerName> {
        self.with_proxy_options(Switch::On, Switch::Off, Switch::Off)
    }

    ///
    #[allow(clippy::missing_const_for_fn)]
    #[must_use]
    pub fn with_proxy_options(
        self,
        xclient: Switch,
        proxy_protocol: Switch,
        proxy_smtp_auth: Switch,
    ) -> Builder<WantsServerName> {
        Builder::<WantsServerName> {
            state: WantsServerName {
                parent: self.state,
                xclient,
                proxy_protocol,
                proxy_smtp_auth,
                proxy_pass_error_message: FieldHost::default_proxy_pass_error_message(),
            },
        }
    }
}

impl Builder<WantsServerName> {
    /// The host answers under its resource name only.
    #[allow(clippy::missing_const_for_fn)]
    #[must_use]
    pub fn with_default_server_name(self) -> Builder<WantsRawBlocks> {
        Builder::<WantsRawBlocks> {
            state: WantsRawBlocks {
                parent: self.state,
                server_name: None,
            },
        }
    }

    ///
    #[must_use]
    pub fn with_server_name(self, server_name: &[&str]) -> Builder<WantsRawBlocks> {
        Builder::<WantsRawBlocks> {
            state: WantsRawBlocks {
                parent: self.state,
                server_name: Some(server_name.iter().map(ToString::to_string).collect()),
            },
        }
    }
}

impl Builder<WantsRawBlocks> {
    ///
    #[must_use]
    pub fn without_raw_blocks(self) -> Builder<WantsValidate> {
        self.with_raw_blocks(&[], &[])
    }

    /// Verbatim lines injected at the top and the bottom of every block.
    #[must_use]
    pub fn with_raw_blocks(
        self,
        raw_prepend: &[&str],
        raw_append: &[&str],
    ) -> Builder<WantsValidate> {
        Builder::<WantsValidate> {
            state: WantsValidate {
                parent: self.state,
                raw_prepend: raw_prepend.iter().map(ToString::to_string).collect(),
                raw_append: raw_append.iter().map(ToString::to_string).collect(),
                cfg_prepend: std::collections::BTreeMap::new(),
                cfg_append: std::collections::BTreeMap::new(),
            },
        }
    }

    /// Structured directives injected around the block, raw lines after them.
    #[allow(clippy::missing_const_for_fn)]
    #[must_use]
    pub fn with_blocks(
        self,
        cfg_prepend: std::collections::BTreeMap<String, DirectiveValue>,
        cfg_append: std::collections::BTreeMap<String, DirectiveValue>,
        raw_prepend: Vec<String>,
        raw_append: Vec<String>,
    ) -> Builder<WantsValidate> {
        Builder::<WantsValidate> {
            state: WantsValidate {
                parent: self.state,
                raw_prepend,
                raw_append,
                cfg_prepend,
                cfg_append,
            },
        }
    }
}
