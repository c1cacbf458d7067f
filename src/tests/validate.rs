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

use super::host_from_toml;
use crate::{FieldSsl, HostFacts, Mailhost, Switch, ValidationError};

const FACTS: HostFacts = HostFacts { ipv6: true };
const IPV4_ONLY: HostFacts = HostFacts { ipv6: false };

#[test]
fn plaintext_host_needs_no_tls_material() {
    assert!(Mailhost::validate(
        "mx",
        host_from_toml("listen_port = 25"),
        &FieldSsl::default(),
        &FACTS
    )
    .is_ok());
}

#[test]
fn tls_material_without_tls_is_fine() {
    assert!(Mailhost::validate(
        "mx",
        host_from_toml(
            r#"
listen_port = 25
ssl_cert = "/etc/ssl/mx.crt"
ssl_key = "/etc/ssl/mx.key"
"#
        ),
        &FieldSsl::default(),
        &FACTS
    )
    .is_ok());
}

#[test]
fn tls_without_material_is_rejected() {
    for input in [
        "listen_port = 587\nssl = true\nssl_port = 465",
        "listen_port = 587\nssl = true\nssl_port = 465\nssl_cert = \"/tmp/server.crt\"",
        "listen_port = 587\nssl = true\nssl_port = 465\nssl_key = \"/tmp/server.pem\"",
        "listen_port = 587\nstarttls = \"on\"",
        "listen_port = 587\nstarttls = \"only\"\nssl_key = \"/tmp/server.pem\"",
    ] {
        let err = Mailhost::validate(
            "mx",
            host_from_toml(input),
            &FieldSsl::default(),
            &FACTS,
        )
        .unwrap_err();
        assert!(
            matches!(err, ValidationError::MissingTlsMaterial { .. }),
            "accepted: {input}"
        );
    }
}

#[test]
fn ipv6_on_an_ipv4_only_machine_is_skipped() {
    let host = Mailhost::validate(
        "mx",
        host_from_toml("listen_port = 25\nipv6_enable = true"),
        &FieldSsl::default(),
        &IPV4_ONLY,
    )
    .unwrap();

    assert_eq!(host.ipv6_listen_ip, Vec::<String>::new());
}

#[test]
fn ipv6_listeners_follow_the_plain_port() {
    let host = Mailhost::validate(
        "mx",
        host_from_toml("listen_port = 143\nipv6_enable = true"),
        &FieldSsl::default(),
        &FACTS,
    )
    .unwrap();

    assert_eq!(host.ipv6_listen_ip, vec!["::".to_string()]);
    assert_eq!(host.ipv6_listen_port, 143);
}

#[test]
fn ipv6_listen_port_override_is_kept() {
    let host = Mailhost::validate(
        "mx",
        host_from_toml("listen_port = 143\nipv6_enable = true\nipv6_listen_port = 1143"),
        &FieldSsl::default(),
        &FACTS,
    )
    .unwrap();

    assert_eq!(host.ipv6_listen_port, 1143);
}

#[test]
fn server_name_defaults_to_the_resource_name() {
    let host = Mailhost::validate(
        "mail.example.com",
        host_from_toml("listen_port = 25"),
        &FieldSsl::default(),
        &FACTS,
    )
    .unwrap();

    assert_eq!(host.server_name, vec!["mail.example.com".to_string()]);
}

#[test]
fn empty_server_name_falls_back_to_the_resource_name() {
    let host = Mailhost::validate(
        "mail.example.com",
        host_from_toml("listen_port = 25\nserver_name = []"),
        &FieldSsl::default(),
        &FACTS,
    )
    .unwrap();

    assert_eq!(host.server_name, vec!["mail.example.com".to_string()]);
}

#[test]
fn global_ssl_defaults_are_resolved() {
    let host = Mailhost::validate(
        "mx",
        host_from_toml("listen_port = 25"),
        &FieldSsl::default(),
        &FACTS,
    )
    .unwrap();

    assert_eq!(host.ssl_ciphers, "HIGH:!aNULL:!MD5");
    assert_eq!(host.ssl_protocols, "TLSv1.2 TLSv1.3");
    assert_eq!(host.ssl_prefer_server_ciphers, Switch::On);
}

#[test]
fn per_host_ssl_values_win_over_the_defaults() {
    let host = Mailhost::validate(
        "mx",
        host_from_toml(
            r#"
listen_port = 25
ssl_ciphers = "EECDH+AESGCM"
ssl_prefer_server_ciphers = "off"
"#,
        ),
        &FieldSsl::default(),
        &FACTS,
    )
    .unwrap();

    assert_eq!(host.ssl_ciphers, "EECDH+AESGCM");
    assert_eq!(host.ssl_prefer_server_ciphers, Switch::Off);
}

#[test]
fn ssl_port_is_dropped_without_a_tls_listener() {
    let host = Mailhost::validate(
        "mx",
        host_from_toml("listen_port = 25\nssl_port = 25"),
        &FieldSsl::default(),
        &FACTS,
    )
    .unwrap();

    assert_eq!(host.ssl_port, None);
}

#[test]
fn tls_listener_without_a_port_takes_the_plain_one() {
    let host = Mailhost::validate(
        "mx",
        host_from_toml(
            r#"
listen_port = 465
ssl = true
ssl_cert = "/etc/ssl/mx.crt"
ssl_key = "/etc/ssl/mx.key"
"#,
        ),
        &FieldSsl::default(),
        &FACTS,
    )
    .unwrap();

    assert_eq!(host.ssl_port, Some(465));
}
