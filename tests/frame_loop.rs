use stagehand::{
    components::{Sprite, Transform, Velocity},
    engine::{Engine, EngineSettings},
    Manager, TypeRegistry,
};

fn engine(name: &str) -> Engine {
    Engine::new(EngineSettings {
        scene_name: name.into(),
        report_every: 0,
    })
}

#[test]
fn mover_advances_position_then_compaction_empties_population() {
    let mut registry = TypeRegistry::new();
    let mut manager = Manager::new();

    let id = {
        let entity = manager.add_entity();
        entity
            .add_component(&mut registry, Transform::new(0.0, 0.0))
            .expect("transform attaches");
        entity
            .add_component(&mut registry, Velocity::new(1.0, 0.0))
            .expect("velocity attaches");
        entity.id()
    };

    for _ in 0..3 {
        manager.update(&registry);
    }
    let transform = manager
        .entity(id)
        .expect("entity survives updates")
        .get_component::<Transform>(&registry)
        .expect("transform present");
    assert_eq!(transform.x, 3.0);
    assert_eq!(transform.y, 0.0);

    manager.entity_mut(id).expect("entity still held").destroy();
    assert_eq!(manager.entity_count(), 1);
    manager.refresh();
    assert_eq!(manager.entity_count(), 0);
}

#[test]
fn refresh_keeps_the_active_entity_of_a_pair() {
    let mut registry = TypeRegistry::new();
    let mut manager = Manager::new();

    let keep = {
        let entity = manager.add_entity();
        entity
            .add_component(&mut registry, Sprite::new("keep"))
            .expect("sprite attaches");
        entity.id()
    };
    let doomed = {
        let entity = manager.add_entity();
        entity.destroy();
        entity.id()
    };

    manager.refresh();
    assert_eq!(manager.entity_count(), 1);
    assert!(manager.entity(keep).is_some());
    assert!(manager.entity(doomed).is_none());
}

#[test]
fn full_frames_run_update_draw_and_refresh_in_order() {
    let mut registry = TypeRegistry::new();
    let mut manager = Manager::new();

    let id = {
        let entity = manager.add_entity();
        entity
            .add_component(&mut registry, Transform::new(0.0, 0.0))
            .unwrap();
        entity
            .add_component(&mut registry, Velocity::new(2.0, 0.0))
            .unwrap();
        entity
            .add_component(&mut registry, Sprite::new("walker"))
            .unwrap();
        entity.id()
    };

    let mut populations = Vec::new();
    engine("walk").run_with_hook(&registry, &mut manager, 5, |summary| {
        populations.push(summary.entities);
    });

    assert_eq!(populations, vec![1, 1, 1, 1, 1]);
    let entity = manager.entity(id).unwrap();
    assert_eq!(
        entity.get_component::<Transform>(&registry).unwrap().x,
        10.0
    );
    // One draw per frame, none lost to the update or refresh phases.
    assert_eq!(
        entity.get_component::<Sprite>(&registry).unwrap().frames_drawn(),
        5
    );
}
