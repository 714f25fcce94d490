//! Card play integration tests.
//!
//! These tests drive built-in cards through the catalog and play helpers
//! against a small board, checking both legality and the resulting state.

use eol_ccg::cards::{BackdoorAccess, Card, CardCatalog, NetworkExpansion, ScorchedEarth};
use eol_ccg::core::{
    resources, Attribute, BoardConfig, ContextEvent, Faction, FactionId, GameContext, Territory,
    TerritoryId, TerritoryKind,
};
use eol_ccg::effects::{CardEffect, Duration, InstallationKind, InstallationStatus};
use eol_ccg::error::PlayError;
use eol_ccg::rules::{legal_targets, play_by_id, play_card};

const BOARD: &str = r#"{
    "territories": [
        {
            "id": "midtown",
            "name": "Midtown",
            "kind": "corporate",
            "attributes": { "corporate_influence": 80, "resource_value": 3, "stability_index": 20, "population": 5 },
            "adjacent": ["docks", "arcology"]
        },
        {
            "id": "docks",
            "name": "The Docks",
            "attributes": { "corporate_influence": 55 },
            "adjacent": ["midtown"]
        },
        {
            "id": "arcology",
            "name": "Arcology",
            "kind": "corporate",
            "attributes": { "corporate_influence": 100 },
            "adjacent": ["midtown"]
        }
    ],
    "factions": [
        { "id": "criminal", "resources": [["credits", 5]], "deck": { "size": 30, "hand_count": 5 } },
        { "id": "anarch", "resources": [["credits", 5], ["dataTokens", 2], ["influence", 1]], "deck": { "size": 2, "hand_count": 5 } },
        { "id": "weyland", "resources": [["credits", 10]] },
        { "id": "nbn", "resources": [["credits", 6]] }
    ],
    "active_faction": "criminal"
}"#;

fn board() -> GameContext {
    GameContext::from_config(BoardConfig::from_json(BOARD).unwrap()).unwrap()
}

fn credits(ctx: &GameContext, faction: FactionId) -> i64 {
    ctx.resource(faction, resources::CREDITS).unwrap()
}

fn territories(ctx: &GameContext) -> Vec<Territory> {
    ctx.territories().cloned().collect()
}

fn factions(ctx: &GameContext) -> Vec<Faction> {
    ctx.factions().cloned().collect()
}

// =============================================================================
// Runner plays
// =============================================================================

/// A criminal with 5 credits backdoors a territory next to runner influence.
#[test]
fn test_backdoor_access_next_to_runner_influence() {
    let mut ctx = board();
    let midtown = TerritoryId::new("midtown");
    let card = BackdoorAccess::new();

    // docks (influence 55) gives runners 45 next to midtown
    assert!(ctx.adjacent_territories(&midtown).any(|t| t.runner_influence() > 0));
    assert!(card.can_play(&ctx, Some(&midtown)));
    assert!(card.resolve(&mut ctx, Some(&midtown)));

    assert_eq!(credits(&ctx, FactionId::Criminal), 3);
    let installs = &ctx.territory(&midtown).unwrap().installations;
    assert_eq!(installs.len(), 1);
    assert_eq!(installs[0].faction, FactionId::Criminal);
    assert_eq!(installs[0].duration, Duration::Turns(1));
}

#[test]
fn test_network_expansion_needs_runner_neighbour() {
    let mut ctx = board();
    let card = NetworkExpansion::new();

    // arcology's only neighbour is midtown (runner influence 20)
    assert!(card.can_play(&ctx, Some(&"arcology".into())));

    ctx.modify_attribute(&"midtown".into(), Attribute::CorporateInfluence, 20);
    assert!(!card.can_play(&ctx, Some(&"arcology".into())));
}

/// Influence 10 reduced by 10 twice stays at 0.
#[test]
fn test_network_expansion_influence_floor() {
    let mut ctx = board();
    let catalog = CardCatalog::standard();
    let docks = TerritoryId::new("docks");
    ctx.modify_attribute(&docks, Attribute::CorporateInfluence, -45);
    ctx.modify_resource(FactionId::Criminal, resources::CREDITS, 1);

    play_by_id(&catalog, &mut ctx, "network_expansion", Some(&docks)).unwrap();
    assert_eq!(ctx.territory(&docks).unwrap().corporate_influence(), 0);

    play_by_id(&catalog, &mut ctx, "network_expansion", Some(&docks)).unwrap();
    assert_eq!(ctx.territory(&docks).unwrap().corporate_influence(), 0);
    assert_eq!(ctx.territory(&docks).unwrap().installations.len(), 2);
}

#[test]
fn test_bank_job_only_on_corporate() {
    let mut ctx = board();
    let catalog = CardCatalog::standard();

    let err = play_by_id(&catalog, &mut ctx, "bank_job", Some(&"docks".into())).unwrap_err();
    assert!(matches!(err, PlayError::Illegal { .. }));

    play_by_id(&catalog, &mut ctx, "bank_job", Some(&"midtown".into())).unwrap();
    assert_eq!(credits(&ctx, FactionId::Criminal), 9);
    assert_eq!(ctx.territory(&"midtown".into()).unwrap().attributes.stability_index(), 15);
}

#[test]
fn test_legal_targets_for_bank_job() {
    let ctx = board();
    let card = CardCatalog::standard().create("bank_job").unwrap();

    let targets = legal_targets(&ctx, card.as_ref());

    assert_eq!(targets, vec![TerritoryId::new("arcology"), TerritoryId::new("midtown")]);
}

// =============================================================================
// Corporation plays
// =============================================================================

/// Scorched earth with nobody tagged is illegal and changes nothing.
#[test]
fn test_scorched_earth_without_tags_is_illegal() {
    let mut ctx = board();
    let before_territories = territories(&ctx);
    let before_factions = factions(&ctx);
    let before_events = ctx.events().len();

    let result = play_card(&mut ctx, &ScorchedEarth::new(), Some(&"docks".into()));

    assert_eq!(
        result,
        Err(PlayError::Illegal {
            card: "scorched_earth".to_string(),
            target: "territory 'docks'".to_string(),
        })
    );
    assert_eq!(territories(&ctx), before_territories);
    assert_eq!(factions(&ctx), before_factions);
    assert_eq!(ctx.events().len(), before_events);
}

#[test]
fn test_scorched_earth_full_resolution() {
    let mut ctx = board();
    let catalog = CardCatalog::standard();
    let midtown = TerritoryId::new("midtown");

    // Criminal lays a foothold, NBN tags through surveillance
    play_by_id(&catalog, &mut ctx, "backdoor_access", Some(&midtown)).unwrap();
    play_by_id(&catalog, &mut ctx, "surveillance_grid", Some(&midtown)).unwrap();
    assert!(ctx.tag_runner(FactionId::Criminal, 1));

    let outcome = play_by_id(&catalog, &mut ctx, "scorched_earth", Some(&midtown)).unwrap();

    assert_eq!(credits(&ctx, FactionId::Weyland), 6);
    assert_eq!(ctx.faction(FactionId::Criminal).unwrap().deck.size, 27);
    // Anarch deck of 2 floors at 0
    let anarch = ctx.faction(FactionId::Anarch).unwrap();
    assert_eq!(anarch.deck.size, 0);
    assert_eq!(anarch.resource(resources::DATA_TOKENS), 1);
    assert_eq!(anarch.resource(resources::INFLUENCE), 0);

    let t = ctx.territory(&midtown).unwrap();
    assert_eq!(t.attributes.stability_index(), 10);
    assert_eq!(t.attributes.resource_value(), 2);
    assert_eq!(t.attributes.population(), 4);
    assert_eq!(t.corporate_influence(), 95);

    // Stealth damaged, grid untouched, aftermath appended last
    assert_eq!(t.installations.len(), 3);
    assert_eq!(t.installations[0].status, InstallationStatus::Damaged);
    assert_eq!(t.installations[0].effects[0], CardEffect::SecurityReduction { amount: 1 });
    assert_eq!(t.installations[1].status, InstallationStatus::Active);
    assert_eq!(t.installations[2].kind, InstallationKind::Operation);
    assert_eq!(t.installations[2].duration, Duration::Turns(2));

    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, ContextEvent::InstallationDamaged { .. })));
    assert_eq!(
        outcome
            .events
            .iter()
            .filter(|e| matches!(e, ContextEvent::RunnerDamaged { .. }))
            .count(),
        2
    );
}

#[test]
fn test_ice_wall_and_armed_response() {
    let mut ctx = board();
    let catalog = CardCatalog::standard();

    play_by_id(&catalog, &mut ctx, "ice_wall", Some(&"docks".into())).unwrap();
    assert_eq!(ctx.territory(&"docks".into()).unwrap().attributes.security_level(), 1);

    assert!(play_by_id(&catalog, &mut ctx, "armed_response", None).is_err());
    ctx.tag_runner(FactionId::Anarch, 2);
    play_by_id(&catalog, &mut ctx, "armed_response", None).unwrap();

    assert_eq!(ctx.faction(FactionId::Anarch).unwrap().deck.size, 0);
    assert_eq!(ctx.faction(FactionId::Criminal).unwrap().deck.size, 30);
    // 10 - 3 (ice) - 3 (response)
    assert_eq!(credits(&ctx, FactionId::Weyland), 4);
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_unknown_card() {
    let mut ctx = board();

    assert!(CardCatalog::standard().create("unknown_card").is_none());
    assert_eq!(
        play_by_id(&CardCatalog::standard(), &mut ctx, "unknown_card", None),
        Err(PlayError::UnknownCard("unknown_card".to_string()))
    );
}

#[test]
fn test_every_catalog_card_has_consistent_identity() {
    let catalog = CardCatalog::standard();

    for id in catalog.ids() {
        let card = catalog.create(id).unwrap();
        assert_eq!(card.id(), id);
        assert_eq!(card.definition().id, id);
        assert!(card.cost().fixed().is_some(), "{id} should have a fixed cost");
    }
}

/// Installation IDs follow the per-context counter.
#[test]
fn test_installation_ids_are_deterministic() {
    let catalog = CardCatalog::standard();
    let run = || {
        let mut ctx = board();
        play_by_id(&catalog, &mut ctx, "backdoor_access", Some(&"midtown".into())).unwrap();
        play_by_id(&catalog, &mut ctx, "corroder", Some(&"docks".into())).unwrap();
        ctx
    };

    let (a, b) = (run(), run());

    assert_eq!(territories(&a), territories(&b));
    let ids: Vec<u64> = a
        .territories()
        .flat_map(|t| t.installations.iter().map(|i| i.id.raw()))
        .collect();
    assert_eq!(ids, vec![2, 1]); // docks sorts before midtown
}

#[test]
fn test_territory_kind_from_config() {
    let ctx = board();
    assert_eq!(ctx.territory(&"midtown".into()).unwrap().kind, TerritoryKind::Corporate);
    assert_eq!(ctx.territory(&"docks".into()).unwrap().kind, TerritoryKind::Neutral);
}
