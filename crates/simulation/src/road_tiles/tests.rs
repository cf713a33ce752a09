#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::buildings::BuildingStore;
    use crate::config::{RoadConfig, DEFAULT_MAX_SQR_DIST};
    use crate::grid::{GridPos, Heading};
    use crate::layers::Layer;
    use crate::occupancy::{OccupancyGrid, StructureKind};
    use crate::road_tiles::{
        PointRef, PointRole, RoadEnv, RoadTileNetwork, TileSelection, TileVariant,
        TileVisualQueue, VisualCommand,
    };
    use crate::snapshot::RoadNetworkSnapshot;

    /// The engine plus its collaborators, without an App.
    #[derive(Default)]
    struct Fixture {
        occupancy: OccupancyGrid,
        buildings: BuildingStore,
        visuals: TileVisualQueue,
        config: RoadConfig,
        network: RoadTileNetwork,
        next_entity: u32,
    }

    impl Fixture {
        fn spawn(&mut self) -> Entity {
            self.next_entity += 1;
            Entity::from_raw(self.next_entity)
        }

        fn build(&mut self, x: i32, y: i32) -> Entity {
            let pos = GridPos::new(x, y);
            let entity = self.spawn();
            assert!(self.occupancy.occupy(pos, entity, StructureKind::Road));
            let mut env = RoadEnv {
                occupancy: &self.occupancy,
                buildings: &mut self.buildings,
                visuals: &mut self.visuals,
                config: &self.config,
            };
            assert!(self.network.on_build(pos, entity, &mut env));
            entity
        }

        fn erase(&mut self, x: i32, y: i32) {
            let pos = GridPos::new(x, y);
            self.occupancy.vacate(pos);
            let mut env = RoadEnv {
                occupancy: &self.occupancy,
                buildings: &mut self.buildings,
                visuals: &mut self.visuals,
                config: &self.config,
            };
            assert!(self.network.on_erase(pos, &mut env).is_some());
        }

        fn place_building(&mut self, x: i32, y: i32) -> Entity {
            let pos = GridPos::new(x, y);
            let entity = self.spawn();
            self.occupancy.occupy(pos, entity, StructureKind::Building);
            self.buildings.place(pos, entity);
            entity
        }

        fn refresh_chain(&mut self, x: i32, y: i32) {
            let mut env = RoadEnv {
                occupancy: &self.occupancy,
                buildings: &mut self.buildings,
                visuals: &mut self.visuals,
                config: &self.config,
            };
            self.network
                .refresh_visuals_and_chain_once(GridPos::new(x, y), &mut env);
        }

        fn selection(&self, x: i32, y: i32) -> TileSelection {
            self.network
                .segment(GridPos::new(x, y))
                .map(|s| s.selection())
                .expect("segment exists")
        }

        fn refreshes(&self, x: i32, y: i32) -> u32 {
            self.network
                .segment(GridPos::new(x, y))
                .map_or(0, |s| s.tile_refreshes)
        }
    }

    fn sel(variant: TileVariant, heading: Heading) -> TileSelection {
        TileSelection { variant, heading }
    }

    #[test]
    fn test_east_west_line_aligns_every_tile() {
        let mut f = Fixture::default();
        for x in 0..4 {
            f.build(x, 0);
        }

        assert_eq!(f.selection(0, 0), sel(TileVariant::Straight, Heading::Right));
        assert_eq!(f.selection(1, 0), sel(TileVariant::Straight, Heading::Right));
        assert_eq!(f.selection(2, 0), sel(TileVariant::Straight, Heading::Right));
        assert_eq!(f.selection(3, 0), sel(TileVariant::Straight, Heading::Left));

        // Three shared edges, one link per direction on each.
        assert_eq!(f.network.links().len(), 6);
        assert!(f.network.link_violations().is_empty());
    }

    #[test]
    fn test_front_and_left_neighbors_make_forward_turn() {
        let mut f = Fixture::default();
        f.build(5, 6);
        f.build(4, 5);
        f.build(5, 5);
        assert_eq!(f.selection(5, 5), sel(TileVariant::Turn, Heading::Forward));
        assert_eq!(f.network.links().len(), 4);
    }

    #[test]
    fn test_erasing_middle_of_line_isolates_ends_with_one_refresh_each() {
        let mut f = Fixture::default();
        f.build(0, 0);
        f.build(1, 0);
        f.build(2, 0);
        let before = (f.refreshes(0, 0), f.refreshes(2, 0));

        f.erase(1, 0);

        assert!(f.network.segment(GridPos::new(1, 0)).is_none());
        assert_eq!(f.selection(0, 0), sel(TileVariant::Straight, Heading::Forward));
        assert_eq!(f.selection(2, 0), sel(TileVariant::Straight, Heading::Forward));
        assert_eq!(f.refreshes(0, 0), before.0 + 1);
        assert_eq!(f.refreshes(2, 0), before.1 + 1);
        assert!(f.network.links().is_empty());
        assert!(f.network.link_violations().is_empty());
    }

    #[test]
    fn test_build_refreshes_only_direct_neighbors() {
        let mut f = Fixture::default();
        for x in 0..5 {
            f.build(x, 0);
        }
        let before: Vec<(u32, TileSelection)> =
            (0..5).map(|x| (f.refreshes(x, 0), f.selection(x, 0))).collect();

        // A spur above the middle tile.
        f.build(2, 1);

        assert_eq!(f.selection(2, 0), sel(TileVariant::ThreeWay, Heading::Forward));
        assert_eq!(f.refreshes(2, 0), before[2].0 + 1);
        for x in [0, 1, 3, 4] {
            assert_eq!(
                (f.refreshes(x, 0), f.selection(x, 0)),
                before[x as usize],
                "tile at ({}, 0) is two hops from the edit",
                x
            );
        }
        assert!(f.network.link_violations().is_empty());
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut f = Fixture::default();
        for (x, y) in [(5, 5), (5, 6), (5, 4), (4, 5), (6, 5), (6, 6)] {
            f.build(x, y);
        }
        let first = RoadNetworkSnapshot::capture(&f.network);
        f.refresh_chain(5, 5);
        let second = RoadNetworkSnapshot::capture(&f.network);
        f.refresh_chain(5, 5);
        let third = RoadNetworkSnapshot::capture(&f.network);

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_plus_shape_center_is_four_way_with_all_links() {
        let mut f = Fixture::default();
        f.build(5, 5);
        for (x, y) in [(5, 6), (6, 5), (5, 4), (4, 5)] {
            f.build(x, y);
        }
        let center = f.network.segment(GridPos::new(5, 5)).unwrap();
        assert_eq!(center.variant, TileVariant::FourWay);
        assert_eq!(center.heading, Heading::Forward);
        assert_eq!(center.points.len(), 8);
        assert!(center.points.iter().all(|p| p.links.len() == 1));
        assert_eq!(f.network.links().len(), 8);

        assert_eq!(f.selection(5, 6), sel(TileVariant::Straight, Heading::Back));
        assert_eq!(f.selection(4, 5), sel(TileVariant::Straight, Heading::Right));
    }

    #[test]
    fn test_links_always_pair_out_with_in() {
        let mut f = Fixture::default();
        let layout = [(2, 2), (3, 2), (4, 2), (3, 3), (3, 1), (4, 3), (2, 1), (1, 1)];
        for (x, y) in layout {
            f.build(x, y);
        }
        f.erase(3, 2);
        f.build(3, 2);
        f.erase(4, 3);

        assert!(f.network.link_violations().is_empty());
        for (out, inbound) in f.network.links() {
            assert_eq!(f.network.point(out).map(|p| p.role), Some(PointRole::Out));
            assert_eq!(f.network.point(inbound).map(|p| p.role), Some(PointRole::In));
            assert!(f.network.links_of(inbound).contains(&out));
        }
    }

    #[test]
    fn test_isolated_segment_has_unlinked_points() {
        let mut f = Fixture::default();
        f.build(7, 7);
        let segment = f.network.segment(GridPos::new(7, 7)).unwrap();
        assert_eq!(segment.variant, TileVariant::Straight);
        assert_eq!(segment.points.len(), 4);
        assert!(segment.points.iter().all(|p| p.links.is_empty()));
    }

    #[test]
    fn test_get_closest_point_on_segment() {
        let mut f = Fixture::default();
        f.build(0, 0);
        f.build(1, 0);
        let pos = GridPos::new(0, 0);
        let segment = f.network.segment(pos).unwrap();
        let (target_ref, target) = segment
            .point_refs()
            .find(|(_, p)| p.role == PointRole::Out && p.position.x > 0.9)
            .expect("out point on the east edge");
        let target_pos = target.position;

        assert_eq!(
            f.network.get_closest_point(pos, target_pos, DEFAULT_MAX_SQR_DIST),
            Some(target_ref)
        );

        let other = f
            .network
            .get_closest_point_excluding(pos, target_pos, target_ref, DEFAULT_MAX_SQR_DIST)
            .expect("paired in point is within range");
        assert_ne!(other, target_ref);
        assert_eq!(f.network.point(other).map(|p| p.role), Some(PointRole::In));

        assert!(f
            .network
            .get_closest_point(pos, Vec3::new(20.0, 0.0, 20.0), DEFAULT_MAX_SQR_DIST)
            .is_none());
        assert!(f
            .network
            .get_closest_point(GridPos::new(9, 9), target_pos, DEFAULT_MAX_SQR_DIST)
            .is_none());
    }

    #[test]
    fn test_build_emits_one_variant_and_orientation() {
        let mut f = Fixture::default();
        let entity = f.build(3, 3);
        assert_eq!(
            f.visuals.commands,
            vec![
                VisualCommand::ActivateVariant {
                    entity,
                    variant: TileVariant::Straight
                },
                VisualCommand::SetOrientation {
                    entity,
                    heading: Heading::Forward
                },
            ]
        );
    }

    #[test]
    fn test_road_refreshes_adjacent_building() {
        let mut f = Fixture::default();
        let building = f.place_building(4, 4);
        f.build(5, 4);

        let placed = f.buildings.get(GridPos::new(4, 4)).copied().unwrap();
        assert_eq!(placed.refreshes, 1);
        assert_eq!(placed.facing, Heading::Right);
        assert!(f.visuals.commands.contains(&VisualCommand::RefreshBuilding {
            entity: building,
            facing: Heading::Right
        }));
        // Buildings are not part of the default tile layers.
        assert_eq!(f.selection(5, 4), sel(TileVariant::Straight, Heading::Forward));
    }

    #[test]
    fn test_configured_tile_layers_count_buildings() {
        let mut f = Fixture {
            config: RoadConfig {
                tile_layers: RoadConfig::default().tile_layers.with(Layer::Buildings),
                ..RoadConfig::default()
            },
            ..Fixture::default()
        };
        f.place_building(1, 0);
        f.build(0, 0);
        assert_eq!(f.selection(0, 0), sel(TileVariant::Straight, Heading::Right));
    }

    #[test]
    fn test_duplicate_build_is_rejected() {
        let mut f = Fixture::default();
        let entity = f.build(2, 2);
        let mut env = RoadEnv {
            occupancy: &f.occupancy,
            buildings: &mut f.buildings,
            visuals: &mut f.visuals,
            config: &f.config,
        };
        assert!(!f.network.on_build(GridPos::new(2, 2), entity, &mut env));
        assert_eq!(f.network.len(), 1);
    }

    #[test]
    fn test_erase_unknown_segment_is_noop() {
        let mut f = Fixture::default();
        let mut env = RoadEnv {
            occupancy: &f.occupancy,
            buildings: &mut f.buildings,
            visuals: &mut f.visuals,
            config: &f.config,
        };
        assert!(f.network.on_erase(GridPos::new(1, 1), &mut env).is_none());
        assert!(f.network.links_of(PointRef::new(GridPos::new(1, 1), 0)).is_empty());
    }

    #[test]
    fn test_build_outside_grid_is_rejected() {
        let mut f = Fixture::default();
        let entity = f.spawn();
        for pos in [GridPos::new(i32::MAX, 0), GridPos::new(0, i32::MIN), GridPos::new(-1, 3)] {
            let mut env = RoadEnv {
                occupancy: &f.occupancy,
                buildings: &mut f.buildings,
                visuals: &mut f.visuals,
                config: &f.config,
            };
            assert!(!f.network.on_build(pos, entity, &mut env));
        }
        assert!(f.network.is_empty());
        assert!(f.visuals.commands.is_empty());
    }
}
