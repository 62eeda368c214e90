use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "arc-line", version, about = "Animated arc drawing demos", long_about = None)]
pub struct Config {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: i32,

    /// Demo shown at startup
    #[arg(long, value_enum, default_value_t = DemoKind::Timed)]
    pub demo: DemoKind,

    /// Overrides the frame rate of every demo
    #[arg(long)]
    pub fps: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Static arc with a sweep of one machine epsilon
    Epsilon,
    /// Two arcs growing by a fixed angle per frame
    FixedStep,
    /// Three arcs turning once per second with time and rotation labels
    Timed,
    /// Concentric arcs of several radii
    Radii,
}

impl DemoKind {
    /// Selection order, number keys 1 to 4 follow it.
    pub const ALL: [DemoKind; 4] = [
        DemoKind::Epsilon,
        DemoKind::FixedStep,
        DemoKind::Timed,
        DemoKind::Radii,
    ];

    pub fn index(self) -> usize {
        DemoKind::ALL
            .iter()
            .position(|&kind| kind == self)
            .unwrap_or(0)
    }
}
