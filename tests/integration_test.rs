//! Integration tests for ipaddr-seq
//!
//! These tests drive the public API the way a caller would: parse networks, run an
//! operation, pull from the resulting sequences.

use ipaddr_seq::models::{Address, BlockIndex, Mask, Network};
use ipaddr_seq::{add, next, prev, range, split, CancelToken, SeqState};

fn ip(s: &str) -> Address {
    s.parse().expect("valid address")
}

fn net(s: &str) -> Network {
    Network::new(s).expect("valid network")
}

fn strings(nets: &[Network]) -> Vec<String> {
    nets.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_add_scenarios() {
    assert_eq!(add(ip("10.0.0.1"), -2), Some(ip("9.255.255.255")));
    assert_eq!(add(ip("10.0.0.1"), 3), Some(ip("10.0.0.4")));
    assert_eq!(add(ip("255.255.255.255"), 1), None);
}

#[test]
fn test_add_round_trip() {
    let starts = ["10.0.0.1", "0.0.0.0", "192.168.255.255", "2001:db8::", "::1"];
    let values = [1i64, -1, 255, 256, -65_537, 1 << 24, 123_456_789];
    for s in starts {
        for v in values {
            let Some(moved) = add(ip(s), v) else { continue };
            if let Some(back) = add(moved, -v) {
                assert_eq!(back, ip(s), "add(add({s}, {v}), {})", -v);
            }
        }
    }
}

#[test]
fn test_adjacent_scenarios() {
    assert_eq!(next(net("10.0.0.0/16")), Some(net("10.1.0.0/16")));
    assert_eq!(prev(net("10.0.0.0/16")), Some(net("9.255.0.0/16")));
}

#[test]
fn test_adjacent_inverse_laws() {
    let nets = [
        "10.0.0.0/16",
        "0.0.0.0/8",
        "255.255.255.0/24",
        "172.16.0.0/12",
        "2001:db8::/32",
        "::/1",
        "ffff::/16",
    ];
    for s in nets {
        let nt = net(s);
        if let Some(p) = prev(nt) {
            assert_eq!(next(p), Some(nt), "next(prev({s}))");
        }
        if let Some(n) = next(nt) {
            assert_eq!(prev(n), Some(nt), "prev(next({s}))");
        }
    }
}

#[test]
fn test_split_scenario() {
    let cancel = CancelToken::new();
    let got = split(net("10.0.0.0/16"), Mask { prefix: 18, bits: 32 }).all(&cancel);
    assert_eq!(
        strings(&got),
        ["10.0.0.0/18", "10.0.64.0/18", "10.0.128.0/18", "10.0.192.0/18"]
    );
}

#[test]
fn test_split_identity_and_invalidity() {
    let cancel = CancelToken::new();
    for s in ["10.0.0.0/16", "0.0.0.0/0", "2001:db8::/48", "::1/128"] {
        let nt = net(s);
        assert_eq!(split(nt, nt.mask()).all(&cancel), vec![nt], "split({s}) identity");

        if nt.prefix > 0 {
            let shorter = Mask {
                prefix: nt.prefix - 1,
                bits: nt.bits(),
            };
            assert!(split(nt, shorter).all(&cancel).is_empty());
        }
        let other_width = Mask {
            prefix: nt.prefix,
            bits: if nt.bits() == 32 { 128 } else { 32 },
        };
        assert!(split(nt, other_width).all(&cancel).is_empty());
    }
}

#[test]
fn test_range_scenarios() {
    let cancel = CancelToken::new();
    let got = range(net("10.0.0.0/16"), 2).take(&cancel, 5);
    assert_eq!(
        strings(&got),
        ["10.0.0.0/16", "10.2.0.0/16", "10.4.0.0/16", "10.6.0.0/16", "10.8.0.0/16"]
    );

    let got = range(net("255.0.0.0/8"), 1).all(&cancel);
    assert_eq!(strings(&got), ["255.0.0.0/8"]);
}

#[test]
fn test_range_bounded_and_monotonic() {
    let cancel = CancelToken::new();
    let cases = [("10.0.0.0/8", 3i64), ("200.0.0.0/8", -9), ("fff0::/12", 1), ("8000::/4", -3)];
    for (s, step) in cases {
        let start = net(s);
        let got = range(start, step).all(&cancel);
        assert_eq!(got[0], start);

        let idx: Vec<u128> = got
            .iter()
            .map(|n| BlockIndex::of(&n.addr, n.prefix).unwrap().0)
            .collect();
        let limit = 1u128 << start.prefix;
        assert!(idx.iter().all(|i| *i < limit), "range({s}, {step}) out of bounds");
        if step > 0 {
            assert!(idx.windows(2).all(|w| w[0] < w[1]));
        } else {
            assert!(idx.windows(2).all(|w| w[0] > w[1]));
        }
    }
}

#[test]
fn test_cancel_across_threads() {
    let cancel = CancelToken::new();
    let remote = cancel.clone();
    let mut seq = range(net("::/128"), 1);

    let first = seq.take(&cancel, 10);
    assert_eq!(first.len(), 10);

    std::thread::spawn(move || remote.cancel()).join().unwrap();
    assert!(seq.all(&cancel).is_empty());
    assert_eq!(seq.state(), SeqState::Cancelled);
}

#[test]
fn test_host_bits_echoed() {
    let cancel = CancelToken::new();
    let stray = net("10.0.0.7/24");
    assert!(!stray.is_canonical());
    assert_eq!(next(stray), Some(net("10.0.1.7/24")));

    let children = split(stray, Mask { prefix: 26, bits: 32 }).all(&cancel);
    assert_eq!(
        strings(&children),
        ["10.0.0.7/26", "10.0.0.71/26", "10.0.0.135/26", "10.0.0.199/26"]
    );
}
