use anyhow::{Context, Result};
use skeleton_frame::{FLAT_LEN, JointType, SkeletonFrame, SkeletonPoint};

// usage: frame_dump <camera_id> <skeleton_id> <frame_offset_ms> [<joint_id> <x> <y> <z>]...
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let camera_id: i32 = parse_next(&mut args, "camera id")?.unwrap_or(0);
    let skeleton_id: i32 = parse_next(&mut args, "skeleton id")?.unwrap_or(0);
    let frame_offset: u32 = parse_next(&mut args, "frame offset")?.unwrap_or(0);

    let mut frame = SkeletonFrame::new(camera_id, skeleton_id, frame_offset);
    while let Some(id) = parse_next::<u8>(&mut args, "joint id")? {
        let joint = JointType::try_from(id)?;
        let x = parse_next(&mut args, "x")?.context("missing x coordinate")?;
        let y = parse_next(&mut args, "y")?.context("missing y coordinate")?;
        let z = parse_next(&mut args, "z")?.context("missing z coordinate")?;
        frame.set_joint(joint, SkeletonPoint::new(x, y, z));
        log::info!("set {joint} = ({x}, {y}, {z})");
    }

    println!(
        "camera={} skeleton={} offset={}ms tracked={}/{}",
        frame.camera_id(),
        frame.skeleton_id(),
        frame.frame_offset(),
        frame.tracked_count(),
        JointType::COUNT
    );
    for (joint, pos) in frame.tracked_joints() {
        println!(
            "  {:>2} {:<14} ({:.3}, {:.3}, {:.3})",
            joint.id(),
            joint.label(),
            pos.x,
            pos.y,
            pos.z
        );
    }

    let flat = frame.to_array();
    println!("flat[{FLAT_LEN}]: {flat:?}");

    Ok(())
}

fn parse_next<T>(args: &mut impl Iterator<Item = String>, what: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.next()
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("invalid {what}: {raw:?}"))
        })
        .transpose()
}
