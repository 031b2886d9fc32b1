#![cfg(test)]
use shostspec_common::config::Config;
use shostspec_common::error::ExpandError;
use shostspec_core::{HostSpec, expand_host};

/// Every valid `prefix[a-b]` yields `b - a + 1` hosts, the i-th padded to the width of `a`.
#[test]
fn range_length_and_padding() {
    let cases: &[(&str, &str, &str)] = &[
        ("node", "1", "9"),
        ("node", "01", "16"),
        ("gpu-", "0098", "0103"),
        ("x", "5", "5"),
        ("c", "999", "1001"),
    ];

    for &(prefix, lo, hi) in cases {
        let a: u64 = lo.parse().unwrap();
        let b: u64 = hi.parse().unwrap();
        let width = lo.len();

        let hosts = expand_host(&format!("{prefix}[{lo}-{hi}]")).unwrap();
        assert_eq!(hosts.len() as u64, b - a + 1, "{prefix}[{lo}-{hi}]");

        for (i, host) in hosts.iter().enumerate() {
            let expected = format!("{prefix}{:0width$}", a + i as u64);
            assert_eq!(host, &expected);
        }
    }
}

#[test]
fn single_value_is_one_host() {
    for n in ["0", "7", "007", "123456789"] {
        assert_eq!(expand_host(&format!("rack[{n}]")).unwrap(), vec![format!("rack{n}")]);
    }
}

#[test]
fn comma_list_keeps_order() {
    let hosts = expand_host("h[9,3,07,1]").unwrap();
    assert_eq!(hosts, vec!["h9", "h3", "h07", "h1"]);
}

#[test]
fn literal_expands_to_itself() {
    for literal in ["login01", "head-node", "a.b.c", "localhost"] {
        assert_eq!(expand_host(literal).unwrap(), vec![literal.to_string()]);
    }
}

#[test]
fn zero_padding_preserved() {
    assert_eq!(
        expand_host("host[008-011]").unwrap(),
        vec!["host008", "host009", "host010", "host011"]
    );
}

#[test]
fn mixed_range_and_single() {
    let hosts = expand_host("host[1234-5678,8100]").unwrap();
    assert_eq!(hosts.len(), (5678 - 1234 + 1) + 1);
    assert_eq!(hosts[0], "host1234");
    assert_eq!(hosts[5678 - 1234], "host5678");
    assert_eq!(hosts.last().map(String::as_str), Some("host8100"));
    assert!(hosts[..hosts.len() - 1].windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn rejections() {
    let kind = |raw: &str| expand_host(raw).unwrap_err().source;

    assert!(matches!(kind("host[10-5]"), ExpandError::ReversedRange { .. }));
    assert!(matches!(kind("host[120-150"), ExpandError::MalformedExpression { .. }));
    assert!(matches!(kind("host[a-b]"), ExpandError::InvalidToken { .. }));
    assert!(matches!(kind("host[]"), ExpandError::MalformedExpression { .. }));
    assert!(matches!(kind("host[1-2-3]"), ExpandError::InvalidToken { .. }));
}

#[test]
fn multiple_expressions_preserve_order() {
    let hosts: Vec<String> = ["h[1-2]", "h[5]"]
        .iter()
        .flat_map(|raw| expand_host(raw).unwrap())
        .collect();
    assert_eq!(hosts, vec!["h1", "h2", "h5"]);
}

#[test]
fn strict_config_matches_permissive_for_numbered_hosts() {
    let strict = Config {
        strict: true,
        ..Config::default()
    };

    for raw in ["n[1-3]", "login4", "r[01]-mgmt"] {
        let permissive: HostSpec = raw.parse().unwrap();
        let strict_spec = HostSpec::parse_with(raw, &strict).unwrap();
        assert_eq!(permissive, strict_spec);
    }
}
