use bevy::prelude::*;
use crate::showcase::Pivot;

#[derive(Component)]
pub struct MainCamera;

pub fn setup(
    mut commands: Commands,
) {
    // 1) Light
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
    ));

    // 2) Camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 3.0, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // 3) Pivots — the anchor points the showcase spawns its models at.
    //    These must exist before the first Update tick.
    for (i, x) in [-2.5, 0.0, 2.5].into_iter().enumerate() {
        commands.spawn((
            Pivot { index: i as u32, model: None },
            Transform::from_xyz(x, 0.0, 0.0),
            Name::new(format!("Pivot {i}")),
        ));
    }
}
