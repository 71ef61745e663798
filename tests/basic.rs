// SPDX-License-Identifier: Apache-2.0

use hierstitch::*;

fn cpu_tree() -> DesignNode {
    DesignNode::root(
        "$root",
        vec![DesignNode::instance(
            "top",
            "Top",
            vec![
                DesignNode::port("top.clk", IO::Input(None)),
                DesignNode::instance(
                    "top.cpu",
                    "CpuCore",
                    vec![
                        DesignNode::port("top.cpu.clk", IO::Input(None)),
                        DesignNode::port("top.cpu.data_out", IO::Output(Some(8))),
                        DesignNode::instance(
                            "top.cpu.alu",
                            "Alu",
                            vec![
                                DesignNode::port("top.cpu.alu.a", IO::Input(Some(4))),
                                DesignNode::port("top.cpu.alu.y", IO::Output(Some(4))),
                            ],
                        ),
                    ],
                ),
            ],
        )],
    )
}

#[test]
fn test_wrapper_and_stub() {
    let mut stitcher = Stitcher::from_reference_str("top.cpu;CpuCore\ntop.cpu.alu;Alu\n").unwrap();
    stitcher.walk(&cpu_tree());
    let artifacts = stitcher.generate();

    assert!(artifacts.status.is_success());
    assert_eq!(
        artifacts.modules.keys().collect::<Vec<_>>(),
        vec!["CpuCore", "Alu"]
    );

    let cpu = &artifacts.modules["CpuCore"];
    assert_eq!(
        cpu.top,
        "\
module CpuCore_top(
input logic clk,
output logic[7:0] data_out,
output logic[3:0] fp1_a,
input logic[3:0] fp1_y
);

CpuCore CpuCore(
.clk(clk),
.data_out(data_out)
);

assign fp1_a = CpuCore_top.CpuCore.alu.a;
assign CpuCore_top.CpuCore.alu.y = fp1_y;
endmodule
"
    );
    assert_eq!(
        cpu.stub,
        "\
module CpuCore(
input logic clk,
output logic[7:0] data_out
);
endmodule
"
    );

    let alu = &artifacts.modules["Alu"];
    assert_eq!(
        alu.top,
        "\
module Alu_top(
input logic[3:0] a,
output logic[3:0] y
);

Alu Alu(
.a(a),
.y(y)
);

endmodule
"
    );
}

#[test]
fn test_excluded_signals_not_auto_wired() {
    let mut stitcher =
        Stitcher::from_reference_str("top.cpu;CpuCore\ntop.cpu.alu;Alu;a\n").unwrap();
    stitcher.walk(&cpu_tree());
    let artifacts = stitcher.generate();

    let cpu = &artifacts.modules["CpuCore"];
    assert!(!cpu.top.contains("fp1_a"));
    assert!(cpu.top.contains("input logic[3:0] fp1_y"));
}

#[test]
fn test_inout_ports_skipped() {
    let tree = DesignNode::root(
        "$root",
        vec![DesignNode::instance(
            "top",
            "Top",
            vec![DesignNode::instance(
                "top.phy",
                "Phy",
                vec![
                    DesignNode::port("top.phy.pad", IO::InOut(Some(8))),
                    DesignNode::port("top.phy.en", IO::Input(None)),
                ],
            )],
        )],
    );
    let mut stitcher = Stitcher::from_reference_str("top;Top\ntop.phy;Phy\n").unwrap();
    stitcher.walk(&tree);
    let artifacts = stitcher.generate();

    let top = &artifacts.modules["Top"];
    assert!(!top.top.contains("pad"));
    assert!(top.top.contains("output logic fp1_en"));
    assert!(top.top.contains("assign fp1_en = Top_top.Top.phy.en;"));
}

#[test]
fn test_parameters_in_stub_and_wrapper() {
    let tree = DesignNode::root(
        "$root",
        vec![DesignNode::instance(
            "top",
            "Top",
            vec![DesignNode::instance(
                "top.fifo",
                "Fifo",
                vec![
                    DesignNode::parameter("top.fifo.DEPTH", "16"),
                    DesignNode::parameter("top.fifo.WIDTH", "8"),
                    DesignNode::port("top.fifo.push", IO::Input(None)),
                    DesignNode::port("top.fifo.data", IO::Input(Some(8))),
                ],
            )],
        )],
    );
    let mut stitcher = Stitcher::from_reference_str("top.fifo;Fifo\n").unwrap();
    stitcher.walk(&tree);
    let artifacts = stitcher.generate();

    let fifo = &artifacts.modules["Fifo"];
    assert_eq!(
        fifo.stub,
        "\
module Fifo#(
parameter DEPTH=16,
parameter WIDTH=8
)
(
input logic push,
input logic[7:0] data
);
endmodule
"
    );
    assert!(fifo.top.contains("Fifo #(.DEPTH(16), .WIDTH(8)) Fifo(\n"));
}

#[test]
fn test_ref_port_exposed_as_input() {
    let tree = DesignNode::root(
        "$root",
        vec![DesignNode::instance(
            "top",
            "Top",
            vec![DesignNode::instance(
                "top.mon",
                "Monitor",
                vec![DesignNode::port("top.mon.state", IO::Ref(Some(4)))],
            )],
        )],
    );
    let mut stitcher = Stitcher::from_reference_str("top;Top\ntop.mon;Monitor\n").unwrap();
    stitcher.walk(&tree);
    let artifacts = stitcher.generate();

    let top = &artifacts.modules["Top"];
    assert!(top.top.contains("input logic[3:0] fp1_state"));
    assert!(top.top.contains("assign Top_top.Top.mon.state = fp1_state;"));
}

#[test]
fn test_write_to_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut stitcher = Stitcher::from_reference_str("top.cpu;CpuCore\ntop.cpu.alu;Alu\n").unwrap();
    stitcher.walk(&cpu_tree());
    let artifacts = stitcher.generate_to_dir(dir.path()).unwrap();

    assert!(artifacts.status.is_success());
    for name in [
        "CpuCore_top.sv",
        "CpuCore.sv",
        "Alu_top.sv",
        "Alu.sv",
        MODULE_DATA_FILE,
        FACING_DATA_FILE,
        DONE_FILE,
    ] {
        assert!(dir.path().join(name).exists(), "missing {name}");
    }
    assert!(!dir.path().join(ERROR_FILE).exists());

    let emitted = std::fs::read_to_string(dir.path().join("CpuCore_top.sv")).unwrap();
    assert_eq!(emitted, artifacts.modules["CpuCore"].top);
}
