use dodger_game::snapshot::{decode_records, encode_records, restore_into};
use dodger_game::{
    DataGenerator, DataSnapshot, GameDataStore, GameSession, Obstacle, Player, PowerUp,
};

fn through_json(snapshot: &DataSnapshot) -> DataSnapshot {
    DataSnapshot {
        players: decode_records::<Player>(&encode_records(&snapshot.players).expect("encode"))
            .expect("decode players"),
        sessions: decode_records::<GameSession>(
            &encode_records(&snapshot.sessions).expect("encode"),
        )
        .expect("decode sessions"),
        obstacles: decode_records::<Obstacle>(
            &encode_records(&snapshot.obstacles).expect("encode"),
        )
        .expect("decode obstacles"),
        power_ups: decode_records::<PowerUp>(
            &encode_records(&snapshot.power_ups).expect("encode"),
        )
        .expect("decode power-ups"),
    }
}

#[test]
fn generated_dataset_survives_save_and_load() {
    let mut original = GameDataStore::new();
    DataGenerator::seeded(2025).generate_complete_dataset(&mut original);
    let saved = original.snapshot();

    let mut restored = GameDataStore::new();
    let summary = restore_into(&mut restored, &through_json(&saved));
    assert_eq!(summary.players, 15);
    assert_eq!(summary.sessions, 50);
    assert_eq!(summary.skipped_sessions, 0);

    // A fresh store hands out the same ids, so the copies match exactly.
    assert_eq!(restored.snapshot(), saved);
}

#[test]
fn sparse_ids_load_with_equal_fields() {
    let mut original = GameDataStore::new();
    let mut generator = DataGenerator::seeded(77);
    generator.generate_players(&mut original, 6);
    generator.generate_sessions(&mut original, 20);
    generator.generate_obstacles(&mut original, 5);
    for id in [2, 4] {
        original.delete_player(id);
        original.delete_obstacle(id);
    }
    let saved = original.snapshot();
    let dangling = saved
        .sessions
        .iter()
        .filter(|s| original.player_by_id(s.player_id).is_none())
        .count();

    let mut restored = GameDataStore::new();
    let summary = restore_into(&mut restored, &through_json(&saved));
    assert_eq!(summary.skipped_sessions, dangling);
    assert_eq!(restored.player_count(), saved.players.len());
    assert_eq!(restored.obstacle_count(), saved.obstacles.len());
    assert_eq!(restored.session_count(), saved.sessions.len() - dangling);

    for (before, after) in saved.players.iter().zip(restored.players()) {
        assert_eq!(
            Player {
                id: after.id,
                ..before.clone()
            },
            *after
        );
    }
    for (before, after) in saved.obstacles.iter().zip(restored.obstacles()) {
        assert_eq!(
            Obstacle {
                id: after.id,
                ..before.clone()
            },
            *after
        );
    }
    let kept = saved
        .sessions
        .iter()
        .filter(|s| original.player_by_id(s.player_id).is_some());
    for (before, after) in kept.zip(restored.sessions()) {
        assert_eq!(before.player_name, after.player_name);
        assert_eq!(before.score, after.score);
        assert_eq!(before.session_date, after.session_date);
        let owner = restored.player_by_id(after.player_id).expect("relinked owner");
        assert_eq!(owner.name, after.player_name);
    }
}
