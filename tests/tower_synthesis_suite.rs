use std::collections::BTreeMap;
use towerstack::{
    Boundary, FloorFunction, SurfaceKind, SynthesisConfig, Synthesis, TemplateLibrary, synthesize,
};

fn example_config() -> SynthesisConfig {
    SynthesisConfig {
        floors_retail: Some(3),
        floors_office: Some(34),
        floors_residential: Some(17),
        floors_hotel: Some(17),
        ..Default::default()
    }
}

fn run(config: &SynthesisConfig) -> Synthesis {
    let library = TemplateLibrary::standard();
    synthesize(config, &library).unwrap()
}

#[test]
fn floor_count_conservation() {
    let result = run(&example_config());
    let mut per_function: BTreeMap<&str, u32> = BTreeMap::new();
    for &id in &result.stories {
        let story = result.graph.story(id);
        let key = match story.function {
            FloorFunction::Retail => "retail",
            FloorFunction::Office => "office",
            f if f.is_residential() => "residential",
            f if f.is_hotel() => "hotel",
            FloorFunction::Skylobby => "skylobby",
            _ => "machine room",
        };
        *per_function.entry(key).or_default() += story.multiplier;
    }
    assert_eq!(per_function["retail"], 3);
    assert_eq!(per_function["office"], 34);
    assert_eq!(per_function["residential"], 17);
    assert_eq!(per_function["hotel"], 17);
    assert_eq!(per_function["skylobby"], 1);
    assert_eq!(per_function["machine room"], 1);
}

#[test]
fn contiguous_floor_numbering_after_insertion() {
    let result = run(&example_config());
    let mut next = 1;
    for &id in &result.stories {
        let story = result.graph.story(id);
        assert_eq!(story.first_floor, next);
        assert_eq!(story.last_floor - story.first_floor + 1, story.multiplier);
        next = story.last_floor + 1;
    }
    // 72 stacked floors plus the inserted sky-lobby.
    assert_eq!(next - 1, 73);
}

#[test]
fn stories_never_overlap_in_z() {
    let result = run(&example_config());
    for pair in result.stories.windows(2) {
        let below = result.graph.story(pair[0]);
        let above = result.graph.story(pair[1]);
        assert!(
            below.true_top() <= above.true_bottom() + 1e-6,
            "{} overlaps {}",
            below.name,
            above.name
        );
    }
}

#[test]
fn multiplied_zones_are_fully_adiabatic() {
    let result = run(&example_config());
    for &id in &result.stories {
        let story = result.graph.story(id);
        for &sid in &story.spaces {
            let space = result.graph.space(sid);
            if result.graph.zone(space.zone).multiplier <= 1 {
                continue;
            }
            for &surf in &space.surfaces {
                let surface = result.graph.surface(surf);
                if matches!(surface.kind, SurfaceKind::Floor | SurfaceKind::Ceiling) {
                    assert!(
                        !matches!(surface.boundary, Boundary::Ground | Boundary::Outdoors),
                        "{} leaks through {:?} in {}",
                        space.name,
                        surface.kind,
                        story.name
                    );
                }
            }
        }
    }
}

#[test]
fn ground_and_roof_conditions_survive() {
    let result = run(&example_config());
    let ground = result.graph.story(result.stories[0]);
    assert!(ground.is_ground);
    let mut saw_ground = false;
    for &sid in &ground.spaces {
        let space = result.graph.space(sid);
        for &surf in &space.surfaces {
            let surface = result.graph.surface(surf);
            if !space.is_plenum() && surface.kind == SurfaceKind::Floor {
                assert_eq!(surface.boundary, Boundary::Ground);
                saw_ground = true;
            }
        }
    }
    assert!(saw_ground);

    let mut saw_roof = false;
    for &id in &result.stories {
        let story = result.graph.story(id);
        if !story.is_top {
            continue;
        }
        for &sid in &story.spaces {
            let space = result.graph.space(sid);
            for &surf in &space.surfaces {
                let surface = result.graph.surface(surf);
                if surface.kind == SurfaceKind::Ceiling
                    && surface.boundary == Boundary::Outdoors
                {
                    saw_roof = true;
                }
            }
        }
    }
    assert!(saw_roof);
}

#[test]
fn exactly_one_skylobby_inserted_mid_building() {
    let result = run(&example_config());
    let skylobbies: Vec<_> = result
        .stories
        .iter()
        .filter(|&&id| result.graph.story(id).function == FloorFunction::Skylobby)
        .collect();
    assert_eq!(skylobbies.len(), 1);
    let sky = result.graph.story(*skylobbies[0]);
    assert_eq!(sky.multiplier, 1);
    // Somewhere in the middle third of the stack.
    let total = result
        .stories
        .iter()
        .map(|&id| result.graph.story(id).true_top())
        .fold(f64::MIN, f64::max);
    assert!(sky.true_bottom() > total / 3.0 && sky.true_bottom() < 2.0 * total / 3.0);
}

#[test]
fn library_reusable_across_runs() {
    let library = TemplateLibrary::standard();
    let first = synthesize(&example_config(), &library).unwrap();
    let second = synthesize(
        &SynthesisConfig {
            floors_retail: Some(0),
            floors_office: Some(20),
            floors_residential: Some(0),
            floors_hotel: Some(0),
            ..Default::default()
        },
        &library,
    )
    .unwrap();
    // 3 + 34 + 17 + 17 + skylobby + machine room in the first run,
    // 20 + skylobby + machine room in the second.
    let total = |s: &Synthesis| -> u32 {
        s.stories.iter().map(|&id| s.graph.story(id).multiplier).sum()
    };
    assert_eq!(total(&first), 73);
    assert_eq!(total(&second), 22);
}

#[test]
fn system_map_matches_final_stories() {
    let result = run(&example_config());
    // One entry per story plus the aggregated hotel common areas.
    assert_eq!(result.system_map.len(), result.stories.len() + 1);
    // Every non-plenum, non-common space is served exactly once.
    let mut served: Vec<&str> = result
        .system_map
        .iter()
        .flat_map(|e| e.space_names.iter().map(String::as_str))
        .collect();
    served.sort();
    served.dedup();
    let mut expected = 0;
    for &id in &result.stories {
        for &sid in &result.graph.story(id).spaces {
            if !result.graph.space(sid).is_plenum() {
                expected += 1;
            }
        }
    }
    assert_eq!(served.len(), expected);
}

#[test]
fn config_errors_abort_synthesis() {
    let library = TemplateLibrary::standard();
    let negative = SynthesisConfig {
        floors_office: Some(-1),
        ..Default::default()
    };
    assert!(synthesize(&negative, &library).is_err());

    let undersized = SynthesisConfig {
        floors_retail: Some(2),
        floors_office: Some(0),
        floors_residential: Some(0),
        floors_hotel: Some(0),
        ..Default::default()
    };
    assert!(synthesize(&undersized, &library).is_err());
}
