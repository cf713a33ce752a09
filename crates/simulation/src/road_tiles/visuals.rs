//! Visual side effects of tile selection: which variant mesh is shown and how
//! the segment is rotated.

use bevy::prelude::*;

use crate::grid::{GridPos, Heading};

use super::types::TileVariant;

/// Write-only sink for the engine's visual changes.
pub trait TileVisuals {
    /// Show `variant` on the segment and hide the other three.
    fn activate_variant(&mut self, entity: Entity, variant: TileVariant);
    fn set_orientation(&mut self, entity: Entity, heading: Heading);
    /// Simple refresh for a non-road neighbor: turn it to `facing`.
    fn refresh_building(&mut self, entity: Entity, facing: Heading);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualCommand {
    ActivateVariant { entity: Entity, variant: TileVariant },
    SetOrientation { entity: Entity, heading: Heading },
    RefreshBuilding { entity: Entity, facing: Heading },
}

/// Visual changes produced during a frame, applied by `apply_tile_visuals`.
#[derive(Resource, Default, Debug)]
pub struct TileVisualQueue {
    pub commands: Vec<VisualCommand>,
}

impl TileVisuals for TileVisualQueue {
    fn activate_variant(&mut self, entity: Entity, variant: TileVariant) {
        self.commands
            .push(VisualCommand::ActivateVariant { entity, variant });
    }

    fn set_orientation(&mut self, entity: Entity, heading: Heading) {
        self.commands
            .push(VisualCommand::SetOrientation { entity, heading });
    }

    fn refresh_building(&mut self, entity: Entity, facing: Heading) {
        self.commands
            .push(VisualCommand::RefreshBuilding { entity, facing });
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Marker on the root entity of a placed road tile.
#[derive(Component, Debug, Clone, Copy)]
pub struct RoadSegmentTag {
    pub pos: GridPos,
}

/// Marker on each of the four variant children of a road tile.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileVariantVisual(pub TileVariant);

/// The four variant child entities of a road tile. Exactly one is visible.
#[derive(Component, Debug, Clone, Copy)]
pub struct RoadTileVisuals {
    pub straight: Entity,
    pub turn: Entity,
    pub three_way: Entity,
    pub four_way: Entity,
}

impl RoadTileVisuals {
    /// Spawn the hidden variant children under `parent`.
    pub fn spawn_children(commands: &mut Commands, parent: Entity) -> Self {
        let mut spawn = |variant: TileVariant| {
            commands
                .spawn((
                    TileVariantVisual(variant),
                    Transform::default(),
                    Visibility::Hidden,
                ))
                .set_parent(parent)
                .id()
        };
        Self {
            straight: spawn(TileVariant::Straight),
            turn: spawn(TileVariant::Turn),
            three_way: spawn(TileVariant::ThreeWay),
            four_way: spawn(TileVariant::FourWay),
        }
    }

    pub fn get(&self, variant: TileVariant) -> Entity {
        match variant {
            TileVariant::Straight => self.straight,
            TileVariant::Turn => self.turn,
            TileVariant::ThreeWay => self.three_way,
            TileVariant::FourWay => self.four_way,
        }
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drain the visual queue onto entity `Visibility` and `Transform`.
///
/// Commands for entities despawned in the same frame are skipped.
pub fn apply_tile_visuals(
    mut queue: ResMut<TileVisualQueue>,
    tiles: Query<&RoadTileVisuals>,
    mut transforms: Query<&mut Transform>,
    mut visibility: Query<&mut Visibility, With<TileVariantVisual>>,
) {
    if queue.commands.is_empty() {
        return;
    }

    for command in queue.commands.drain(..) {
        match command {
            VisualCommand::ActivateVariant { entity, variant } => {
                let Ok(children) = tiles.get(entity) else {
                    continue;
                };
                for candidate in TileVariant::ALL {
                    if let Ok(mut vis) = visibility.get_mut(children.get(candidate)) {
                        *vis = if candidate == variant {
                            Visibility::Inherited
                        } else {
                            Visibility::Hidden
                        };
                    }
                }
            }
            VisualCommand::SetOrientation { entity, heading }
            | VisualCommand::RefreshBuilding {
                entity,
                facing: heading,
            } => {
                if let Ok(mut transform) = transforms.get_mut(entity) {
                    transform.rotation = heading.rotation();
                }
            }
        }
    }
}
