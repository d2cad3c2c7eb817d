//! End-to-end balancing scenarios.
//!
//! Rosters are written as score lists; ids are 1-based positions.

use csb_core::{
    BalanceConfig, BalanceError, Balancer, Entity, Outcome, RangeCounting, balance,
    entities_from_scores,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ten_customers() -> Vec<Entity> {
    entities_from_scores(&[10.0, 10.0, 10.0, 20.0, 20.0, 30.0, 30.0, 30.0, 20.0, 60.0])
}

fn same_score(count: u32, score: f64) -> Vec<Entity> {
    (1..=count).map(|id| Entity::new(id, score)).collect()
}

fn corrected() -> Balancer {
    Balancer::new(BalanceConfig {
        counting: RangeCounting::Corrected,
    })
}

// ---------------------------------------------------------------------------
// Reference counting
// ---------------------------------------------------------------------------

#[test]
fn two_agents_away_busiest_is_lowest_tier() {
    let agents = vec![
        Entity::new(1, 60.0),
        Entity::new(2, 20.0),
        Entity::new(3, 95.0),
        Entity::new(4, 75.0),
    ];
    let customers = vec![
        Entity::new(1, 90.0),
        Entity::new(2, 20.0),
        Entity::new(3, 70.0),
        Entity::new(4, 40.0),
        Entity::new(5, 60.0),
        Entity::new(6, 10.0),
    ];

    assert_eq!(balance(&agents, &customers, &[2, 4]), Ok(1));
}

#[test]
fn even_split_across_tiers_is_a_tie() {
    let agents = entities_from_scores(&[11.0, 21.0, 31.0, 3.0, 4.0, 5.0]);
    assert_eq!(balance(&agents, &ten_customers(), &[]), Ok(0));
}

#[test]
fn large_roster_single_matching_tier() {
    let scores: Vec<f64> = (1..=999).map(f64::from).collect();
    let agents = entities_from_scores(&scores);
    let customers = same_score(10_000, 998.0);

    assert_eq!(balance(&agents, &customers, &[999]), Ok(998));
}

#[test]
fn every_threshold_below_every_customer_is_a_tie() {
    let agents = entities_from_scores(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(balance(&agents, &ten_customers(), &[]), Ok(0));
}

#[test]
fn single_high_tier_takes_everything() {
    let agents = entities_from_scores(&[100.0, 2.0, 3.0, 6.0, 4.0, 5.0]);
    assert_eq!(balance(&agents, &ten_customers(), &[]), Ok(1));
}

#[test]
fn high_tiers_away_leave_nobody_served() {
    let agents = entities_from_scores(&[100.0, 99.0, 88.0, 3.0, 4.0, 5.0]);
    assert_eq!(balance(&agents, &ten_customers(), &[1, 3, 2]), Ok(0));
}

#[test]
fn low_tiers_away_lowest_high_tier_wins() {
    let agents = entities_from_scores(&[100.0, 99.0, 88.0, 3.0, 4.0, 5.0]);
    assert_eq!(balance(&agents, &ten_customers(), &[4, 5, 6]), Ok(3));
}

#[test]
fn shuffled_rosters_give_same_winner() {
    let agents = entities_from_scores(&[60.0, 40.0, 95.0, 75.0]);
    let customers = entities_from_scores(&[90.0, 70.0, 20.0, 40.0, 60.0, 10.0]);
    assert_eq!(balance(&agents, &customers, &[2, 4]), Ok(1));
}

#[test]
fn no_customers_served_is_a_tie() {
    let agents = entities_from_scores(&[10.0, 20.0, 30.0]);
    let customers = entities_from_scores(&[40.0, 50.0, 60.0]);
    assert_eq!(balance(&agents, &customers, &[]), Ok(0));
}

#[test]
fn away_list_over_half_is_rejected() {
    let agents = entities_from_scores(&[10.0, 15.0, 20.0]);
    let customers = entities_from_scores(&[10.0, 12.0, 10.0]);

    let err = balance(&agents, &customers, &[1, 2]).expect_err("2 of 3 away");
    assert!(matches!(err, BalanceError::InvalidAwayCount { limit: 1, .. }));
    assert_eq!(err.code().code(), "E1001");
}

#[test]
fn duplicate_away_ids_count_toward_the_limit() {
    let agents = entities_from_scores(&[10.0, 15.0, 20.0, 25.0]);
    assert!(balance(&agents, &[], &[1, 1, 1]).is_err());
    assert!(balance(&agents, &[], &[1, 1]).is_ok());
}

#[test]
fn unknown_away_ids_are_inert() {
    let agents = entities_from_scores(&[60.0, 20.0, 95.0, 75.0]);
    let customers = entities_from_scores(&[90.0, 20.0, 70.0, 40.0, 60.0, 10.0]);

    let report = Balancer::default()
        .run(&agents, &customers, &[40, 41])
        .expect("two away of four");
    assert_eq!(report.records.len(), 4);
}

// ---------------------------------------------------------------------------
// Corrected counting
// ---------------------------------------------------------------------------

#[test]
fn corrected_counts_boundary_customers() {
    let agents = entities_from_scores(&[60.0, 20.0, 95.0, 75.0]);
    let customers = entities_from_scores(&[90.0, 20.0, 70.0, 40.0, 60.0, 10.0]);

    let report = corrected()
        .run(&agents, &customers, &[])
        .expect("nobody away");
    let counts: Vec<(u32, usize)> = report
        .records
        .iter()
        .map(|r| (r.agent_id, r.customers_quantity))
        .collect();

    // tiers: 20 -> {10,20}, 60 -> {40,60}, 75 -> {70}, 95 -> {90}
    assert_eq!(counts, vec![(2, 2), (1, 2), (4, 1), (3, 1)]);
    assert_eq!(report.outcome, Outcome::NoUniqueWinner);
}

#[test]
fn corrected_can_change_the_winner() {
    // reference: tier 10 -> 2 (third 10 excluded), tier 20 -> 2, tier 60 -> 2 => tie
    // corrected: tier 10 -> 3, tier 20 -> 3, tier 60 -> 4 => id 3
    let agents = entities_from_scores(&[10.0, 20.0, 60.0]);
    assert_eq!(balance(&agents, &ten_customers(), &[]), Ok(0));

    let report = corrected()
        .run(&agents, &ten_customers(), &[])
        .expect("nobody away");
    assert_eq!(report.outcome, Outcome::Winner(3));
}

#[test]
fn corrected_still_rejects_invalid_away_count() {
    let agents = entities_from_scores(&[10.0, 15.0, 20.0]);
    assert!(corrected().run(&agents, &[], &[1, 2]).is_err());
}
