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
use pretty_assertions::assert_eq;

use crate::{Config, Ensure, Protocol, Starttls, Switch};

const COMPLETE: &str = r#"
version_requirement = ">=0.3.0, <1.0.0"

[proxy]
conf_dir = "/etc/nginx"
mode = "0640"
reload = { command = "systemctl", args = ["reload", "nginx"] }

[logs]
format = "{d} - {m}{n}"

[logs.level]
default = "info"
output = "debug"

[ssl]
ciphers = "EECDH+AESGCM"
protocols = "TLSv1.3"
prefer_server_ciphers = "off"

[hosts."mail.example.com"]
listen_port = 143
protocol = "imap"
auth_http = "http://127.0.0.1:9000/auth"
imap_auth = "plain"
imap_capabilities = ["IMAP4rev1", "UIDPLUS"]

[hosts."smtp.example.com"]
listen_ip = "*"
listen_port = 587
ipv6_enable = true
ssl = true
ssl_port = 465
ssl_cert = "/etc/ssl/smtp.crt"
ssl_key = "/etc/ssl/smtp.key"
starttls = "only"
protocol = "smtp"
smtp_auth = "plain login"
raw_append = "satisfy any;"
"#;

#[test]
fn parse() {
    let config = Config::from_toml(COMPLETE);
    assert!(config.is_ok(), "{config:?}");
    let config = config.unwrap();

    assert_eq!(config.proxy.mode, 0o640);
    let reload = config.proxy.reload.as_ref().unwrap();
    assert_eq!(reload.command, "systemctl");
    assert_eq!(reload.args, vec!["reload".to_string(), "nginx".to_string()]);

    assert_eq!(
        config.logs.level.get("default"),
        Some(&log::LevelFilter::Info)
    );

    assert_eq!(config.ssl.ciphers, "EECDH+AESGCM");
    assert_eq!(config.ssl.prefer_server_ciphers, Switch::Off);

    assert_eq!(config.hosts.len(), 2);

    let imap = &config.hosts["mail.example.com"];
    assert_eq!(imap.ensure, Ensure::Present);
    assert_eq!(imap.protocol, Some(Protocol::Imap));
    assert_eq!(imap.listen_ip, vec!["*".to_string()]);
    assert_eq!(imap.xclient, Switch::On);
    assert_eq!(imap.starttls, Starttls::Off);

    let smtp = &config.hosts["smtp.example.com"];
    assert_eq!(smtp.starttls, Starttls::Only);
    assert_eq!(smtp.ssl_port, Some(465));
    assert_eq!(smtp.raw_append, vec!["satisfy any;".to_string()]);
    assert_eq!(smtp.smtp_auth.as_deref(), Some("plain login"));
}

#[test]
fn unfulfilled_version_requirement_is_rejected() {
    let config = Config::from_toml("version_requirement = \">=99.0.0\"");
    assert!(config.is_err());
}

#[test]
fn unknown_fields_are_rejected() {
    let config = Config::from_toml(
        r#"
version_requirement = ">=0.3.0"

[hosts."mail.example.com"]
listen_port = 143
listen_prot = 25
"#,
    );
    assert!(config.is_err());
}

#[test]
fn listen_port_is_mandatory() {
    let config = Config::from_toml(
        r#"
version_requirement = ">=0.3.0"

[hosts."mail.example.com"]
protocol = "imap"
"#,
    );
    assert!(config.is_err());
}

#[test]
fn defaults_fill_an_empty_file() {
    let config = Config::from_toml("version_requirement = \"*\"").unwrap();

    assert_eq!(config.proxy.conf_dir, std::path::PathBuf::from("/etc/nginx"));
    assert_eq!(config.proxy.mode, 0o644);
    assert!(config.hosts.is_empty());
}
