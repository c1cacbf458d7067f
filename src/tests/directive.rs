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

use super::validated;
use crate::directive::render_map;
use crate::{BlockEntry, DirectiveValue, Render, Section, Template, TextRenderer};

fn rendered(map: &std::collections::BTreeMap<String, DirectiveValue>) -> String {
    let mut out = String::new();
    render_map(&mut out, 2, map);
    out
}

#[test]
fn scalar_value_renders_one_line() {
    let map = std::collections::BTreeMap::from([(
        "error_log".to_string(),
        DirectiveValue::Value("/var/log/nginx/mail.err".to_string()),
    )]);

    assert_eq!(rendered(&map), "  error_log /var/log/nginx/mail.err;\n");
}

#[test]
fn empty_value_renders_the_bare_key() {
    let map = std::collections::BTreeMap::from([(
        "ip_hash".to_string(),
        DirectiveValue::Value(String::new()),
    )]);

    assert_eq!(rendered(&map), "  ip_hash;\n");
}

#[test]
fn list_value_renders_one_line_per_element() {
    let map = std::collections::BTreeMap::from([(
        "include".to_string(),
        DirectiveValue::Values(vec![
            "mail.d/a.conf".to_string(),
            "mail.d/b.conf".to_string(),
        ]),
    )]);

    assert_eq!(
        rendered(&map),
        "  include mail.d/a.conf;\n  include mail.d/b.conf;\n"
    );
}

#[test]
fn nested_map_renders_a_block() {
    let map = std::collections::BTreeMap::from([(
        "limits".to_string(),
        DirectiveValue::Block(std::collections::BTreeMap::from([
            ("burst".to_string(), BlockEntry::Value("5".to_string())),
            ("rate".to_string(), BlockEntry::Value("10r/s".to_string())),
        ])),
    )]);

    assert_eq!(
        rendered(&map),
        "  limits {\n    burst 5;\n    rate 10r/s;\n  }\n"
    );
}

#[test]
fn structured_entries_precede_raw_lines() {
    let host = validated(
        r#"
listen_port = 25
raw_append = ["satisfy any;"]

[mailhost_cfg_append]
foo = "bar"
"#,
    );

    assert_eq!(
        TextRenderer.render(Template::PrependAppend(Section::Append), &host),
        "  foo bar;\n  satisfy any;\n"
    );
}

#[test]
fn prepend_lands_at_the_top_append_at_the_bottom() {
    let host = validated(
        r#"
listen_port = 25
raw_prepend = "satisfy any;"

[mailhost_cfg_append]
error_log = "/var/log/nginx/mail.err"
"#,
    );

    let text = TextRenderer.render(Template::Mailhost, &host);
    let prepend = text.find("satisfy any;").expect("prepended line");
    let listen = text.find("listen *:25;").expect("listen line");
    let append = text.find("error_log").expect("appended line");

    assert!(prepend < listen);
    assert!(listen < append);
}

#[test]
fn directive_maps_parse_from_scalars_lists_and_tables() {
    let host = validated(
        r#"
listen_port = 25

[mailhost_cfg_prepend]
error_log = "/var/log/nginx/mail.err"
include = ["a.conf", "b.conf"]
limits = { rate = "10r/s" }
"#,
    );

    assert_eq!(
        host.cfg_prepend.get("error_log"),
        Some(&DirectiveValue::Value(
            "/var/log/nginx/mail.err".to_string()
        ))
    );
    assert_eq!(
        host.cfg_prepend.get("include"),
        Some(&DirectiveValue::Values(vec![
            "a.conf".to_string(),
            "b.conf".to_string()
        ]))
    );
    assert_eq!(
        host.cfg_prepend.get("limits"),
        Some(&DirectiveValue::Block(std::collections::BTreeMap::from([(
            "rate".to_string(),
            BlockEntry::Value("10r/s".to_string())
        )])))
    );
}
