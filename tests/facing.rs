// SPDX-License-Identifier: Apache-2.0

use hierstitch::*;

/// Two sites instantiating `Core`, each with an `alu` child of the same
/// relative shape.
fn two_site_tree() -> DesignNode {
    let site = |site: &str| {
        DesignNode::instance(
            format!("top.{site}"),
            "Core",
            vec![
                DesignNode::port(format!("top.{site}.en"), IO::Input(None)),
                DesignNode::instance(
                    format!("top.{site}.alu"),
                    "Alu",
                    vec![
                        DesignNode::port(format!("top.{site}.alu.a"), IO::Input(Some(4))),
                        DesignNode::port(format!("top.{site}.alu.y"), IO::Output(Some(4))),
                    ],
                ),
            ],
        )
    };
    DesignNode::root(
        "$root",
        vec![DesignNode::instance(
            "top",
            "Top",
            vec![site("u0"), site("u1")],
        )],
    )
}

fn two_site_reference() -> &'static str {
    "top.u0;Core\ntop.u0.alu;Alu\ntop.u1;Core\ntop.u1.alu;Alu\n"
}

#[test]
fn test_equivalent_shapes_share_one_prefix() {
    let mut stitcher = Stitcher::from_reference_str(two_site_reference()).unwrap();
    stitcher.walk(&two_site_tree());
    let artifacts = stitcher.generate();

    // Visit order assigns fp1_ to top.u0.alu and fp3_ to top.u1.alu; the
    // canonicalization pass rewrites the second site to the first site's
    // prefix.
    let u0 = stitcher.store().scope(&HierPath::new("top.u0")).unwrap();
    let u1 = stitcher.store().scope(&HierPath::new("top.u1")).unwrap();
    assert_eq!(u0.children[0].facing_prefix, "fp1_");
    assert_eq!(u1.children[0].facing_prefix, "fp1_");

    // The wrapper exposes exactly one boundary group for the shared shape.
    let core = &artifacts.modules["Core"];
    assert_eq!(core.top.matches("fp1_a").count(), 2); // declaration + assign
    assert!(!core.top.contains("fp3_"));
}

#[test]
fn test_facing_metadata_agrees_with_wrappers() {
    let mut stitcher = Stitcher::from_reference_str(two_site_reference()).unwrap();
    stitcher.walk(&two_site_tree());
    let artifacts = stitcher.generate();

    let facing: serde_json::Value = serde_json::from_str(&artifacts.facing_data).unwrap();
    assert_eq!(
        facing["top.u0"]["facingNode"][0]["portPrefix"],
        facing["top.u1"]["facingNode"][0]["portPrefix"],
    );
    assert_eq!(facing["top.u0"]["facingNode"][0]["portPrefix"], "fp1_");
    assert_eq!(facing["top.u1"]["facingNode"][0]["hierarchy"], "top.u1.alu");
}

#[test]
fn test_distinct_shapes_keep_distinct_prefixes() {
    let tree = DesignNode::root(
        "$root",
        vec![DesignNode::instance(
            "top",
            "Top",
            vec![DesignNode::instance(
                "top.u0",
                "Core",
                vec![
                    DesignNode::instance(
                        "top.u0.alu",
                        "Alu",
                        vec![DesignNode::port("top.u0.alu.a", IO::Input(None))],
                    ),
                    DesignNode::instance(
                        "top.u0.shifter",
                        "Shifter",
                        vec![DesignNode::port("top.u0.shifter.s", IO::Input(None))],
                    ),
                ],
            )],
        )],
    );
    let mut stitcher = Stitcher::from_reference_str(
        "top.u0;Core\ntop.u0.alu;Alu\ntop.u0.shifter;Shifter\n",
    )
    .unwrap();
    stitcher.walk(&tree);
    let artifacts = stitcher.generate();

    let core = &artifacts.modules["Core"];
    assert!(core.top.contains("fp1_a"));
    assert!(core.top.contains("fp2_s"));
}

#[test]
fn test_first_site_first_child_wins() {
    // Reference load order differs from visit order; canonical prefixes
    // follow visit order, not load order.
    let reference = "top.u1.alu;Alu\ntop.u1;Core\ntop.u0.alu;Alu\ntop.u0;Core\n";
    let mut stitcher = Stitcher::from_reference_str(reference).unwrap();
    stitcher.walk(&two_site_tree());
    stitcher.generate();

    // top.u0 is visited first, so its alu keeps its counter-assigned prefix.
    let u0 = stitcher.store().scope(&HierPath::new("top.u0")).unwrap();
    let u1 = stitcher.store().scope(&HierPath::new("top.u1")).unwrap();
    assert_eq!(u0.children[0].facing_prefix, u1.children[0].facing_prefix);
    assert_eq!(u0.children[0].facing_prefix, "fp1_");
}
