use argh::FromArgs;

use screws::{Adjoint, HomogeneousTransformF64, RotationF64, Translation, Twist};

#[derive(FromArgs)]
/// Build a rigid transform, take its twist and walk along the screw motion
struct Args {
    /// elementary rotation axis: x, y or z
    #[argh(option, default = "'z'")]
    axis: char,

    /// rotation angle in radians, within [0, 2pi)
    #[argh(option, default = "std::f64::consts::FRAC_PI_2")]
    angle: f64,

    /// translation along x
    #[argh(option, default = "1.0")]
    tx: f64,

    /// translation along y
    #[argh(option, default = "0.0")]
    ty: f64,

    /// translation along z
    #[argh(option, default = "0.5")]
    tz: f64,

    /// number of intermediate poses sampled along the motion
    #[argh(option, short = 'n', default = "4")]
    steps: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let rotation = RotationF64::from_axis_tag(args.axis, args.angle)?;
    let h = HomogeneousTransformF64::new(rotation, Translation::new(args.tx, args.ty, args.tz));
    log::info!("transform:\n{h}");

    let twist = h.log();
    log::info!("twist coordinates: {}", twist.coordinates());
    log::info!("pitch: {}, magnitude: {}", twist.pitch(), twist.norm());

    let axis = twist.axis();
    log::info!("screw axis point: {}, direction: {}", axis.head(), axis.tail());

    let steps = args.steps.max(1);
    for k in 0..=steps {
        let theta = k as f64 / steps as f64;
        let pose = twist.exp(theta);
        log::info!("theta {theta:.3}: origin at {}", pose * Translation::zero());
    }

    let roundtrip = twist.exp_unit();
    if roundtrip.approx_eq(&h) {
        log::info!("exp(log(H)) matches H");
    } else {
        log::warn!("exp(log(H)) drifted from H:\n{roundtrip}");
    }

    // the same motion seen from the frame of H
    let adjoint = Adjoint::from(h);
    let moved: Twist<f64> = adjoint.inv() * twist;
    log::info!("adjoint:\n{adjoint}");
    log::info!("twist in the frame of H: {}", moved.coordinates());

    Ok(())
}
