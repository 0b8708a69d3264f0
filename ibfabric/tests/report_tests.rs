//! End-to-end tests: report text in, topology lines out

use ibfabric::{
    parse_str, render, BlockingFactor, FabricError, FabricMetrics, FieldError, RenderOptions,
};

const FABRIC: &str = include_str!("fixtures/fabric.ibnetdiscover");

const LEAF1: &str = "S-0002c902004a2f90";
const LEAF2: &str = "S-0002c902004a2fa0";
const SPINE: &str = "S-0002c902004a3000";

#[test]
fn test_fixture_topology() {
    let topology = parse_str(FABRIC).unwrap();
    assert_eq!(topology.len(), 3);

    let leaf1 = topology.get(LEAF1).unwrap();
    assert_eq!(leaf1.name, "MF0;leaf1:SX6036/U1");
    assert_eq!(leaf1.lid, 3);
    assert_eq!(leaf1.ports, 8);
    assert_eq!(leaf1.hosts().len(), 3);
    assert_eq!(leaf1.hosts()["H-0002c903000a0d0c"].links(), 2);
    assert_eq!(leaf1.host_link_total(), 4);
    assert_eq!(leaf1.switches()[SPINE].links(), 2);

    let spine = topology.get(SPINE).unwrap();
    assert!(spine.hosts().is_empty());
    assert_eq!(spine.switches()[LEAF1].links(), 2);
    assert_eq!(spine.switches()[LEAF2].links(), 1);

    // Ca blocks do not leak into the last switch
    assert_eq!(spine.switch_link_total(), 3);
}

#[test]
fn test_fixture_metrics() {
    let topology = parse_str(FABRIC).unwrap();

    let leaf1 = FabricMetrics::of(topology.get(LEAF1).unwrap());
    assert_eq!(leaf1.free_ports, 2);
    assert_eq!(leaf1.blocking_factor.to_string(), "3:1");

    let leaf2 = FabricMetrics::of(topology.get(LEAF2).unwrap());
    assert_eq!(leaf2.free_ports, 5);
    assert_eq!(leaf2.blocking_factor.to_string(), "7:1");

    let spine = FabricMetrics::of(topology.get(SPINE).unwrap());
    assert_eq!(spine.free_ports, 5);
    assert_eq!(spine.blocking_factor.to_string(), "5:3");
}

#[test]
fn test_fixture_rendering() {
    let topology = parse_str(FABRIC).unwrap();
    let lines = render(&topology, &RenderOptions::default());

    assert_eq!(
        lines,
        vec![
            "SwitchName=Switch1 Nodes=node[001-003] Switches=Switch3 # Free ports: 2,\tblocking-factor: 3:1".to_string(),
            "SwitchName=Switch2 Nodes=node[004-005] Switches=Switch3 # Free ports: 5,\tblocking-factor: 7:1".to_string(),
            format!(
                "SwitchName=Switch3 Nodes= Switches=Switch[1-2]{} # Free ports: 5,\tblocking-factor: 5:3",
                " ".repeat(9)
            ),
        ]
    );
}

#[test]
fn test_fixture_rendering_nodes_only() {
    let topology = parse_str(FABRIC).unwrap();
    let options = RenderOptions {
        prefix: "ib".to_string(),
        nodes_only: true,
    };
    let lines = render(&topology, &options);

    assert_eq!(lines[0], "SwitchName=ib1 Nodes=node[001-003] # Free ports: 2,\tblocking-factor: 3:1");
    assert_eq!(
        lines[2],
        format!("SwitchName=ib3 Nodes={} # Free ports: 5,\tblocking-factor: 5:3", " ".repeat(13))
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let topology = parse_str(FABRIC).unwrap();
    let options = RenderOptions::default();
    assert_eq!(render(&topology, &options), render(&topology, &options));
    assert_eq!(
        render(&parse_str(FABRIC).unwrap(), &options),
        render(&topology, &options)
    );
}

#[test]
fn test_two_switch_round_trip() {
    let report = "\
Switch\t4 \"S-a\"\t\t# \"A\" enhanced port 0 lid 1 lmc 0
[1]\t\"H-h1\"[1](h1p) \t\t# \"node1 HCA-1\" lid 10 4xEDR
[2]\t\"S-b\"[1]\t\t# \"B\" lid 2 4xEDR

Switch\t4 \"S-b\"\t\t# \"B\" enhanced port 0 lid 2 lmc 0
[1]\t\"S-a\"[2]\t\t# \"A\" lid 1 4xEDR
";
    let topology = parse_str(report).unwrap();

    let a = FabricMetrics::of(topology.get("S-a").unwrap());
    assert_eq!(a.free_ports, 2);
    assert_eq!(a.blocking_factor.to_string(), "3:1");

    let b = FabricMetrics::of(topology.get("S-b").unwrap());
    assert_eq!(b.free_ports, 3);
    assert_eq!(b.blocking_factor.to_string(), "3:1");
}

#[test]
fn test_leaf_switch_without_uplinks() {
    let report = "\
Switch\t36 \"S-a\"\t\t# \"A\" enhanced port 0 lid 1 lmc 0
[1]\t\"H-h1\"[1](h1p) \t\t# \"node1 HCA-1\" lid 10 4xEDR
";
    let topology = parse_str(report).unwrap();
    let metrics = FabricMetrics::of(topology.get("S-a").unwrap());

    assert_eq!(metrics.blocking_factor, BlockingFactor::NoUplinks);
    assert_eq!(metrics.free_ports, 35);
}

#[test]
fn test_unknown_prefix_changes_nothing() {
    let base = "\
Switch\t8 \"S-a\"\t\t# \"A\" enhanced port 0 lid 1 lmc 0
[1]\t\"H-h1\"[1](h1p) \t\t# \"node1 HCA-1\" lid 10 4xEDR
";
    let with_router = format!("{base}[2]\t\"R-r1\"[1]\t\t# \"router\" lid 30 4xEDR\n");

    assert_eq!(parse_str(&with_router).unwrap(), parse_str(base).unwrap());
}

#[test]
fn test_missing_header_field_is_fatal() {
    let report = format!(
        "{FABRIC}\nSwitch\t8 \"S-0002c902004a4000\"\t\t# leaf3 enhanced port 0 lid 9 lmc 0\n"
    );
    let err = parse_str(&report).unwrap_err();

    match err {
        FabricError::MalformedHeader { line_no, reason, .. } => {
            assert_eq!(line_no, FABRIC.lines().count() + 2);
            assert_eq!(reason, FieldError::MissingQuotedFields(2));
        }
        other => panic!("unexpected error: {other}"),
    }
}
