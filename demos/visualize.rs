//! Render one simulated frame as labeled bit cells on stdout.
//!
//! Run with: cargo run --example visualize

use canload_rs::{FieldKind, FrameVariant, build_frame};

fn main() {
    let variant = FrameVariant::FdStandard;
    let payload_bytes = 16;

    let bits = build_frame(variant, payload_bytes);
    let stuffed = bits.iter().filter(|b| b.kind == FieldKind::Stuff).count();
    println!(
        "{variant:?}, {payload_bytes} data bytes: {} bits on the wire ({stuffed} stuffed)\n",
        bits.len()
    );

    for bit in &bits {
        println!("{:>8}  {}  {:?}", bit.label, bit.symbol(), bit.kind);
    }
}
