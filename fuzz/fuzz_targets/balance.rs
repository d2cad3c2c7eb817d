#![no_main]

use csb_core::{BalanceConfig, Balancer, Entity, Outcome, RangeCounting, away_limit};
use libfuzzer_sys::fuzz_target;

/// Split `data` into agents, customers and away ids.
///
/// Byte 0 and 1 give the agent and customer counts; each entity then takes one
/// score byte, and every remaining byte is an away id.
fn decode(data: &[u8]) -> Option<(Vec<Entity>, Vec<Entity>, Vec<u32>)> {
    let (&agent_count, rest) = data.split_first()?;
    let (&customer_count, rest) = rest.split_first()?;
    let (agent_bytes, rest) = rest.split_at_checked(usize::from(agent_count))?;
    let (customer_bytes, away_bytes) = rest.split_at_checked(usize::from(customer_count))?;

    let entities = |bytes: &[u8]| -> Vec<Entity> {
        bytes
            .iter()
            .zip(1..)
            .map(|(&score, id)| Entity::new(id, f64::from(score)))
            .collect()
    };
    let away = away_bytes.iter().map(|&b| u32::from(b)).collect();
    Some((entities(agent_bytes), entities(customer_bytes), away))
}

fuzz_target!(|data: &[u8]| {
    let Some((agents, customers, away)) = decode(data) else {
        return;
    };

    for counting in [RangeCounting::Reference, RangeCounting::Corrected] {
        let balancer = Balancer::new(BalanceConfig { counting });
        match balancer.run(&agents, &customers, &away) {
            Ok(report) => {
                assert!(away.len() <= away_limit(agents.len()));
                let credited: usize = report.records.iter().map(|r| r.customers_quantity).sum();
                assert!(credited <= customers.len());
                if let Outcome::Winner(id) = report.outcome {
                    assert!(agents.iter().any(|a| a.id == id) && !away.contains(&id));
                }
            }
            Err(_) => assert!(away.len() > away_limit(agents.len())),
        }
    }
});
