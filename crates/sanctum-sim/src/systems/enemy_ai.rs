//! Enemy system: one ordered pass over the roster per tick.
//!
//! Enemies are visited in id order. Each agent sees the positions its
//! predecessors wrote earlier in the same pass.

use glam::{Vec2, Vec3};
use hecs::{Entity, World};

use sanctum_ai::behavior::{evaluate, separation, AgentAction, AgentContext, Neighbor};
use sanctum_core::components::*;
use sanctum_core::constants::LUNGE_REVERT_SECS;
use sanctum_core::types::EnemyId;
use sanctum_terrain::floor_at;

use crate::scheduler::{Scheduler, TaskId};
use crate::DeferredTask;

/// A melee blow landed on the player this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeleeHit {
    pub enemy: EnemyId,
    pub damage: u32,
}

struct Agent {
    entity: Entity,
    enemy: Enemy,
    locomotion: Locomotion,
    melee: MeleeState,
}

/// Step every enemy toward the player and resolve melee strikes.
/// Returns the strikes in the order they landed.
pub fn run(
    world: &mut World,
    scheduler: &mut Scheduler<DeferredTask>,
    player: Vec3,
    now_secs: f64,
    dt: f32,
) -> Vec<MeleeHit> {
    let mut roster: Vec<(Agent, Neighbor)> = world
        .query::<(&Enemy, &GroundPosition, &Locomotion, &MeleeState)>()
        .iter()
        .map(|(entity, (enemy, pos, locomotion, melee))| {
            (
                Agent {
                    entity,
                    enemy: *enemy,
                    locomotion: *locomotion,
                    melee: *melee,
                },
                Neighbor {
                    id: enemy.id,
                    position: pos.0,
                },
            )
        })
        .collect();
    roster.sort_by_key(|(agent, _)| agent.enemy.id);

    let (mut agents, mut positions): (Vec<Agent>, Vec<Neighbor>) = roster.into_iter().unzip();
    let mut hits = Vec::new();

    for i in 0..agents.len() {
        let agent = &mut agents[i];
        let position = positions[i].position;

        let ctx = AgentContext {
            id: agent.enemy.id,
            archetype: agent.enemy.archetype,
            position,
            elevation: floor_at(position),
            speed: agent.locomotion.speed,
            facing: agent.locomotion.facing,
            player,
            separation: separation(agent.enemy.id, position, &positions),
            now_secs,
            last_attack_secs: agent.melee.last_attack_secs,
            dt,
        };

        match evaluate(&ctx) {
            AgentAction::Advance { position, facing } => {
                positions[i].position = position;
                agent.locomotion.facing = facing;
            }
            AgentAction::Strike { damage, lunge } => {
                agent.melee.last_attack_secs = Some(now_secs);
                if let Some(previous) = agent.melee.lunge.take() {
                    scheduler.cancel(TaskId(previous.ticket));
                }
                let task = scheduler.schedule(
                    now_secs + LUNGE_REVERT_SECS,
                    DeferredTask::LungeRevert {
                        enemy: agent.enemy.id,
                    },
                );
                agent.melee.lunge = Some(Lunge {
                    offset: lunge,
                    ticket: task.0,
                });
                hits.push(MeleeHit {
                    enemy: agent.enemy.id,
                    damage,
                });
            }
            AgentAction::Hold => {}
        }
    }

    for (agent, neighbor) in agents.iter().zip(&positions) {
        if let Ok((pos, locomotion, melee)) = world
            .query_one_mut::<(&mut GroundPosition, &mut Locomotion, &mut MeleeState)>(agent.entity)
        {
            pos.0 = neighbor.position;
            *locomotion = agent.locomotion;
            *melee = agent.melee;
        }
    }

    hits
}

/// Clear a lunge if `task` is still the revert that owns it.
pub fn revert_lunge(world: &mut World, entity: Entity, task: TaskId) {
    if let Ok(melee) = world.query_one_mut::<&mut MeleeState>(entity) {
        if melee.lunge.map(|l| l.ticket) == Some(task.0) {
            melee.lunge = None;
        }
    }
}

/// Render offset of an enemy's current lunge.
pub fn lunge_offset(melee: &MeleeState) -> Vec2 {
    melee.lunge.map_or(Vec2::ZERO, |l| l.offset)
}
