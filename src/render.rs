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
use std::fmt::Write;

use crate::log_channel;
use crate::mailhost::Mailhost;
use crate::plan::{Fragment, OrderKey};

/// Which side of the generated directives an injected block lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// before everything but the opening brace
    Prepend,
    /// after everything but the closing brace
    Append,
}

/// Identity of a text template known to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// injected structured + raw lines, top or bottom of a server block
    PrependAppend(Section),
    /// the `ssl_*` directives shared by the plain and TLS blocks
    SslSettings,
    /// protocol, authentication and proxying directives
    Common,
    /// the plaintext (possibly STARTTLS) `server` block
    Mailhost,
    /// the dedicated TLS `server` block
    MailhostSsl,
}

/// Text producer for one template + host pair.
///
/// Total and pure for any validated host: same input, same output.
pub trait Render {
    /// Produce the text of `template` for `host`.
    fn render(&self, template: Template, host: &Mailhost) -> String;
}

/// Built-in renderer emitting nginx-style `mail` server blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Render for TextRenderer {
    fn render(&self, template: Template, host: &Mailhost) -> String {
        match template {
            Template::PrependAppend(section) => prepend_append(host, section),
            Template::SslSettings => ssl_settings(host),
            Template::Common => common(host),
            Template::Mailhost => self.server_block(host, false),
            Template::MailhostSsl => self.server_block(host, true),
        }
    }
}

/// Render every planned fragment of one host, order keys attached.
#[must_use]
pub fn render_fragments<R: Render>(renderer: &R, fragments: &[Fragment]) -> Vec<(OrderKey, String)> {
    let rendered = fragments
        .iter()
        .map(|fragment| {
            (
                fragment.order.clone(),
                renderer.render(fragment.template, &fragment.host),
            )
        })
        .collect::<Vec<_>>();

    if let Some(fragment) = fragments.first() {
        log::debug!(
            target: log_channel::RENDER,
            "host '{}': rendered {} fragment(s)",
            fragment.host.name,
            rendered.len()
        );
    }
    rendered
}

impl TextRenderer {
    /// The two server blocks share one shape and differ only in their listen
    /// directives and in when the TLS settings are included.
    fn server_block(&self, host: &Mailhost, tls: bool) -> String {
        let mut out = String::from("server {\n");
        out.push_str(&self.render(Template::PrependAppend(Section::Prepend), host));

        if tls {
            // validation resolved ssl_port whenever ssl is enabled
            let port = host.ssl_port.unwrap_or(host.listen_port);
            for addr in &host.listen_ip {
                let _ = writeln!(
                    out,
                    "  listen {addr}:{port} ssl{};",
                    options(host.listen_options.as_deref())
                );
            }
            for addr in &host.ipv6_listen_ip {
                let _ = writeln!(
                    out,
                    "  listen [{addr}]:{port} ssl{};",
                    options(Some(host.ipv6_listen_options.as_str()))
                );
            }
        } else {
            for addr in &host.listen_ip {
                let _ = writeln!(
                    out,
                    "  listen {addr}:{}{};",
                    host.listen_port,
                    options(host.listen_options.as_deref())
                );
            }
            for addr in &host.ipv6_listen_ip {
                let _ = writeln!(
                    out,
                    "  listen [{addr}]:{}{};",
                    host.ipv6_listen_port,
                    options(Some(host.ipv6_listen_options.as_str()))
                );
            }
        }

        let _ = writeln!(out, "  server_name {};", host.server_name.join(" "));

        if tls {
            out.push_str(&self.render(Template::SslSettings, host));
        } else if host.starttls.is_enabled() {
            let _ = writeln!(out, "  starttls {};", host.starttls);
            out.push_str(&self.render(Template::SslSettings, host));
        }

        out.push_str(&self.render(Template::Common, host));
        out.push_str(&self.render(Template::PrependAppend(Section::Append), host));
        out.push_str("}\n");
        out
    }
}

fn options(options: Option<&str>) -> String {
    match options {
        Some(options) if !options.is_empty() => format!(" {options}"),
        _ => String::new(),
    }
}

fn put(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(out, "  {key} {value};");
}

fn put_opt(out: &mut String, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        put(out, key, value);
    }
}

fn put_path(out: &mut String, key: &str, value: &Option<std::path::PathBuf>) {
    if let Some(value) = value {
        put(out, key, &value.display().to_string());
    }
}

fn put_caps(out: &mut String, key: &str, capabilities: &[String]) {
    if capabilities.is_empty() {
        return;
    }
    let quoted = capabilities
        .iter()
        .map(|capability| format!("\"{capability}\""))
        .collect::<Vec<_>>()
        .join(" ");
    put(out, key, &quoted);
}

// every directive renders only when its source value is set; an unset
// optional is omitted, never emitted empty
fn ssl_settings(host: &Mailhost) -> String {
    let mut out = String::new();
    put_path(&mut out, "ssl_certificate", &host.ssl_cert);
    put_path(&mut out, "ssl_certificate_key", &host.ssl_key);
    put(&mut out, "ssl_ciphers", &host.ssl_ciphers);
    put_path(&mut out, "ssl_client_certificate", &host.ssl_client_cert);
    put_path(&mut out, "ssl_crl", &host.ssl_crl);
    put_path(&mut out, "ssl_dhparam", &host.ssl_dhparam);
    put_opt(&mut out, "ssl_ecdh_curve", &host.ssl_ecdh_curve);
    put_path(&mut out, "ssl_password_file", &host.ssl_password_file);
    put(
        &mut out,
        "ssl_prefer_server_ciphers",
        host.ssl_prefer_server_ciphers.as_str(),
    );
    put(&mut out, "ssl_protocols", &host.ssl_protocols);
    put_opt(&mut out, "ssl_session_cache", &host.ssl_session_cache);
    put_path(
        &mut out,
        "ssl_session_ticket_key",
        &host.ssl_session_ticket_key,
    );
    if let Some(tickets) = host.ssl_session_tickets {
        put(&mut out, "ssl_session_tickets", tickets.as_str());
    }
    put_opt(&mut out, "ssl_session_timeout", &host.ssl_session_timeout);
    put_path(&mut out, "ssl_trusted_certificate", &host.ssl_trusted_cert);
    if let Some(depth) = host.ssl_verify_depth {
        put(&mut out, "ssl_verify_depth", &depth.to_string());
    }
    out
}

fn common(host: &Mailhost) -> String {
    let mut out = String::new();
    if let Some(protocol) = host.protocol {
        put(&mut out, "protocol", protocol.as_str());
    }
    put_opt(&mut out, "auth_http", &host.auth_http);
    put_opt(&mut out, "auth_http_header", &host.auth_http_header);
    put(&mut out, "xclient", host.xclient.as_str());
    put(&mut out, "proxy_protocol", host.proxy_protocol.as_str());
    put(&mut out, "proxy_smtp_auth", host.proxy_smtp_auth.as_str());
    put_opt(&mut out, "imap_auth", &host.imap_auth);
    put_caps(&mut out, "imap_capabilities", &host.imap_capabilities);
    put_opt(&mut out, "imap_client_buffer", &host.imap_client_buffer);
    put_opt(&mut out, "pop3_auth", &host.pop3_auth);
    put_caps(&mut out, "pop3_capabilities", &host.pop3_capabilities);
    put_opt(&mut out, "smtp_auth", &host.smtp_auth);
    put_caps(&mut out, "smtp_capabilities", &host.smtp_capabilities);
    put(
        &mut out,
        "proxy_pass_error_message",
        &host.proxy_pass_error_message,
    );
    out
}

// structured entries first, raw lines verbatim after them
fn prepend_append(host: &Mailhost, section: Section) -> String {
    let (cfg, raw) = match section {
        Section::Prepend => (&host.cfg_prepend, &host.raw_prepend),
        Section::Append => (&host.cfg_append, &host.raw_append),
    };

    let mut out = String::new();
    crate::directive::render_map(&mut out, 2, cfg);
    for line in raw {
        let _ = writeln!(out, "  {line}");
    }
    out
}
