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

use super::{host_from_toml, validated};
use crate::{
    plan, render_fragments, ConcatFile, FieldSsl, HostFacts, Mailhost, Protocol, Template,
    TextRenderer, ValidationError,
};

const SUBMISSION: &str = r#"
listen_port = 587
ssl = true
ssl_port = 465
starttls = "only"
ssl_cert = "/tmp/server.crt"
ssl_key = "/tmp/server.pem"
"#;

#[test]
fn plain_host_is_a_single_header_fragment() {
    let fragments = plan(&validated("listen_port = 25"));

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].order.as_str(), "001");
    assert_eq!(fragments[0].template, Template::Mailhost);
}

#[test]
fn distinct_ports_emit_header_and_ssl() {
    let fragments = plan(&validated(SUBMISSION));

    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].order.as_str(), "001");
    assert_eq!(fragments[0].template, Template::Mailhost);
    assert_eq!(fragments[1].order.as_str(), "700");
    assert_eq!(fragments[1].template, Template::MailhostSsl);
}

#[test]
fn shared_port_suppresses_the_header() {
    let fragments = plan(&validated(
        r#"
listen_port = 587
ssl = true
ssl_port = 587
ssl_cert = "/tmp/server.crt"
ssl_key = "/tmp/server.pem"
"#,
    ));

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].order.as_str(), "700");
    assert_eq!(fragments[0].template, Template::MailhostSsl);
}

#[test]
fn planning_and_rendering_are_idempotent() {
    let host = validated(SUBMISSION);

    let first = ConcatFile::assemble(render_fragments(&TextRenderer, &plan(&host)));
    let second = ConcatFile::assemble(render_fragments(&TextRenderer, &plan(&host)));

    assert_eq!(first, second);
}

#[test]
fn header_renders_before_the_ssl_block() {
    let host = validated(SUBMISSION);
    let mut rendered = render_fragments(&TextRenderer, &plan(&host));

    // the ordering contract must not depend on declaration order
    rendered.reverse();
    let content = ConcatFile::assemble(rendered);

    let header = content.find("listen *:587").expect("header block");
    let ssl = content.find("listen *:465 ssl").expect("ssl block");
    assert!(header < ssl);
}

#[test]
fn submission_host_end_to_end() {
    let host = Mailhost::builder()
        .with_name("domain1.example")
        .with_listen_port(587)
        .without_ipv6()
        .with_tls_and_starttls_only(465, "/tmp/server.crt", "/tmp/server.pem")
        .with_protocol(Protocol::Smtp)
        .with_default_proxy_options()
        .with_default_server_name()
        .without_raw_blocks()
        .validate(&FieldSsl::default(), &HostFacts { ipv6: true })
        .unwrap();

    let fragments = plan(&host);
    assert_eq!(fragments.len(), 2);
    for fragment in &fragments {
        assert_eq!(fragment.host.server_name, vec!["domain1.example".to_string()]);
    }

    // the same declaration without its certificate must not validate
    let err = Mailhost::validate(
        "domain1.example",
        host_from_toml(
            r#"
listen_port = 587
ssl = true
ssl_port = 465
starttls = "only"
ssl_key = "/tmp/server.pem"
"#,
        ),
        &FieldSsl::default(),
        &HostFacts { ipv6: true },
    )
    .unwrap_err();
    assert!(matches!(err, ValidationError::MissingTlsMaterial { .. }));
}
