//! Simple meshes for road tile variants and buildings.
//!
//! Each variant child of a road tile gets a centre slab plus one arm per open
//! side, authored in the tile's local frame so the parent's rotation turns
//! the arms toward the connected neighbours.

use std::collections::HashMap;

use bevy::prelude::*;

use road_sim::buildings::Building;
use road_sim::config::{CELL_SIZE, LANE_OFFSET, WORLD_HEIGHT, WORLD_WIDTH};
use road_sim::road_tiles::{TileVariant, TileVariantVisual};

const ROAD_WIDTH: f32 = 2.0 * LANE_OFFSET + 0.2;
const ROAD_THICKNESS: f32 = 0.04;
const BUILDING_SIZE: f32 = 0.7;
const BUILDING_HEIGHT: f32 = 0.6;

/// A box in a tile's local frame: centre offset and full size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub offset: Vec3,
    pub size: Vec3,
}

/// Boxes that make up `variant` in its local frame (heading Forward).
pub fn variant_slabs(variant: TileVariant) -> Vec<Slab> {
    let lift = Vec3::Y * ROAD_THICKNESS * 0.5;
    let arm_len = (CELL_SIZE - ROAD_WIDTH) * 0.5;

    let mut slabs = vec![Slab {
        offset: lift,
        size: Vec3::new(ROAD_WIDTH, ROAD_THICKNESS, ROAD_WIDTH),
    }];
    for side in variant.open_sides().iter() {
        let dir = side.direction();
        let size = if dir.x.abs() > 0.5 {
            Vec3::new(arm_len, ROAD_THICKNESS, ROAD_WIDTH)
        } else {
            Vec3::new(ROAD_WIDTH, ROAD_THICKNESS, arm_len)
        };
        slabs.push(Slab {
            offset: dir * (ROAD_WIDTH + arm_len) * 0.5 + lift,
            size,
        });
    }
    slabs
}

#[derive(Resource)]
pub struct TileMeshAssets {
    variants: HashMap<TileVariant, Vec<(Handle<Mesh>, Vec3)>>,
    road_material: Handle<StandardMaterial>,
    building_mesh: Handle<Mesh>,
    door_mesh: Handle<Mesh>,
    building_material: Handle<StandardMaterial>,
    door_material: Handle<StandardMaterial>,
}

pub fn setup_tile_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let variants = TileVariant::ALL
        .into_iter()
        .map(|variant| {
            let parts = variant_slabs(variant)
                .into_iter()
                .map(|slab| (meshes.add(Cuboid::from_size(slab.size)), slab.offset))
                .collect();
            (variant, parts)
        })
        .collect();

    commands.insert_resource(TileMeshAssets {
        variants,
        road_material: materials.add(Color::srgb(0.25, 0.25, 0.28)),
        building_mesh: meshes.add(Cuboid::new(BUILDING_SIZE, BUILDING_HEIGHT, BUILDING_SIZE)),
        door_mesh: meshes.add(Cuboid::new(0.2, 0.3, 0.05)),
        building_material: materials.add(Color::srgb(0.75, 0.65, 0.5)),
        door_material: materials.add(Color::srgb(0.35, 0.2, 0.1)),
    });
}

pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(WORLD_WIDTH, WORLD_HEIGHT))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.25))),
        Transform::from_xyz(WORLD_WIDTH / 2.0, -0.01, WORLD_HEIGHT / 2.0),
    ));
}

/// Give freshly spawned variant children their slab meshes.
pub fn attach_variant_meshes(
    mut commands: Commands,
    assets: Option<Res<TileMeshAssets>>,
    added: Query<(Entity, &TileVariantVisual), Added<TileVariantVisual>>,
) {
    let Some(assets) = assets else {
        return;
    };
    for (entity, visual) in &added {
        let Some(parts) = assets.variants.get(&visual.0) else {
            continue;
        };
        for (mesh, offset) in parts {
            commands
                .spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(assets.road_material.clone()),
                    Transform::from_translation(*offset),
                ))
                .set_parent(entity);
        }
    }
}

/// Give freshly placed buildings a body and a door on their local front.
pub fn attach_building_meshes(
    mut commands: Commands,
    assets: Option<Res<TileMeshAssets>>,
    added: Query<Entity, Added<Building>>,
) {
    let Some(assets) = assets else {
        return;
    };
    for entity in &added {
        commands.entity(entity).insert((
            Mesh3d(assets.building_mesh.clone()),
            MeshMaterial3d(assets.building_material.clone()),
        ));
        commands
            .spawn((
                Mesh3d(assets.door_mesh.clone()),
                MeshMaterial3d(assets.door_material.clone()),
                Transform::from_xyz(0.0, 0.0, BUILDING_SIZE * 0.5),
            ))
            .set_parent(entity);
    }
}
