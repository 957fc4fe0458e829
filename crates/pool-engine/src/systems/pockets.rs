//! Pocket captures and the scoring rules that follow them.

use crate::api::types::{BallCategory, BallId, FoulReason, MatchEvent};
use crate::components::table::Pocket;
use crate::core::config::RulesConfig;
use crate::core::scene::Scene;
use crate::systems::turn::TurnState;

/// Balls whose centre is inside some pocket's capture radius, in scene order.
/// A ball sitting in two overlapping capture circles is still listed once.
pub fn captured(scene: &Scene, pockets: &[Pocket]) -> Vec<(BallId, BallCategory)> {
    scene
        .iter()
        .filter(|ball| pockets.iter().any(|p| p.captures(ball.position)))
        .map(|ball| (ball.id, ball.category))
        .collect()
}

/// Apply the pocket rules to every ball captured this tick.
///
/// Every capture emits one `BallPotted`, followed by whatever it triggers
/// (group assignment, score change, foul, result). Potting the eight ends the
/// game and the remaining captures of the tick are left alone.
pub fn evaluate(
    scene: &mut Scene,
    pockets: &[Pocket],
    turn: &mut TurnState,
    rules: &RulesConfig,
    events: &mut Vec<MatchEvent>,
) {
    if turn.is_over() {
        return;
    }

    for (id, category) in captured(scene, pockets) {
        let shooter = turn.current_player;
        match category {
            BallCategory::Cue => {
                events.push(MatchEvent::BallPotted {
                    id,
                    category,
                    legal: false,
                });
                scene.reset_cue(rules.cue_start);
                turn.flag_foul(FoulReason::CuePotted, events);
            }
            BallCategory::Eight => {
                let legal = turn.score(shooter) >= rules.group_size;
                events.push(MatchEvent::BallPotted { id, category, legal });
                scene.despawn(id);
                let winner = if legal { shooter } else { shooter.other() };
                log::info!(
                    "eight ball potted by player {} ({})",
                    shooter.number(),
                    if legal { "legal" } else { "early" }
                );
                turn.declare_winner(winner, events);
                return;
            }
            BallCategory::GroupA | BallCategory::GroupB => {
                let Some(group) = category.group() else {
                    continue;
                };
                let own = match turn.group_of(shooter) {
                    Some(assigned) => assigned == group,
                    None => true,
                };
                events.push(MatchEvent::BallPotted {
                    id,
                    category,
                    legal: own,
                });
                scene.despawn(id);

                if own {
                    if turn.group_of(shooter).is_none() {
                        turn.assign_groups(shooter, group, events);
                    }
                    log::info!("player {} pots ball {}", shooter.number(), id.0);
                    turn.credit(shooter, events);
                    turn.potted_legal_this_turn = true;
                } else {
                    log::info!("player {} pots opponent ball {}", shooter.number(), id.0);
                    turn.credit(shooter.other(), events);
                    turn.flag_foul(FoulReason::PottedOpponentBall, events);
                }
            }
        }
    }
}
