use criterion::{criterion_group, criterion_main, Criterion};
use dancers::{
    config::{DanceFloorConfig, DancerConfig},
    contexts::LoaderMessage,
    glam::Vec3,
    skeleton_definition::SkeletonDefinition,
    DanceFloor,
};

// Roughly the size of a motion capture skeleton: five limbs of twelve bones each
fn skeleton() -> SkeletonDefinition {
    let mut definition = SkeletonDefinition::default();
    let hips = definition.add_bone("Hips", None, Vec3::Y);
    for limb in 0..5 {
        let mut parent = hips;
        for segment in 0..12 {
            let direction = Vec3::new((limb as f32).cos(), 0.5, (limb as f32).sin());
            parent = definition.add_bone(
                format!("Limb{limb}Segment{segment}"),
                Some(parent),
                direction * 0.1,
            );
        }
    }
    definition
}

fn skins(c: &mut Criterion) {
    let config = DanceFloorConfig {
        dancers: vec![DancerConfig::default(); 4],
        seed: Some(0),
        ..Default::default()
    };
    let mut dance_floor = DanceFloor::new(&config).unwrap();
    for dancer in dance_floor.dancers().to_vec() {
        dance_floor
            .loader()
            .send(LoaderMessage::SkeletonLoaded {
                dancer,
                skeleton: skeleton(),
                clip: None,
            })
            .unwrap();
    }

    c.bench_function("Skins", |b| b.iter(|| dance_floor.tick(1. / 72.)));
}

criterion_group!(benches, skins);
criterion_main!(benches);
