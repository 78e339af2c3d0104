pub mod routes;

use crate::ApiResult;
use axum::Json;
use squad_core::{
    FieldOrientation, FormationLayout, Player, PlayerMarker, PlayerPositionType, PlayerSkills,
    Roster, RosterEntry, TeamAnalyzer, TeamAssignment, TeamBalancer, TeamSide, TeamStats,
};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TeamCreateRequest {
    pub players: Vec<RosterEntry>,
    #[serde(default)]
    pub orientation: FieldOrientation,
}

#[derive(Serialize)]
pub struct TeamCreateResponse {
    pub team_a: TeamDto,
    pub team_b: TeamDto,
    pub power_gap: u32,
}

#[derive(Serialize)]
pub struct TeamDto {
    pub side: TeamSide,
    pub name: &'static str,
    pub total_power: u32,
    pub players: Vec<PlayerDto>,
    pub stats: Option<TeamStatsDto>,
    pub markers: Vec<PlayerMarker>,
}

#[derive(Serialize)]
pub struct PlayerDto {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub position: PlayerPositionType,
    pub power: u8,
    pub skills: PlayerSkills,
}

#[derive(Serialize)]
pub struct TeamStatsDto {
    #[serde(flatten)]
    pub stats: TeamStats,
    pub tactic_description: &'static str,
}

pub async fn team_create_action(
    Json(request): Json<TeamCreateRequest>,
) -> ApiResult<Json<TeamCreateResponse>> {
    let players = Roster::from_entries(&request.players)?;

    let response = build_teams(&players, request.orientation);

    info!(
        "balanced {} players, power gap {}",
        players.len(),
        response.power_gap
    );

    Ok(Json(response))
}

fn build_teams(players: &[Player], orientation: FieldOrientation) -> TeamCreateResponse {
    let assignment = TeamBalancer::balance(players, &mut rand::thread_rng());

    TeamCreateResponse {
        team_a: team_dto(&assignment, TeamSide::A, orientation),
        team_b: team_dto(&assignment, TeamSide::B, orientation),
        power_gap: assignment.power_gap(),
    }
}

fn team_dto(assignment: &TeamAssignment<'_>, side: TeamSide, orientation: FieldOrientation) -> TeamDto {
    let team = assignment.team(side);

    TeamDto {
        side,
        name: side.display_name(),
        total_power: assignment.total_power(side),
        players: team
            .iter()
            .map(|player| PlayerDto {
                id: player.id,
                name: player.name.clone(),
                short_name: player.short_name().to_string(),
                position: player.position,
                power: player.power(),
                skills: player.skills,
            })
            .collect(),
        stats: TeamAnalyzer::analyze(team).map(|stats| TeamStatsDto {
            stats,
            tactic_description: stats.tactic.description(),
        }),
        markers: FormationLayout::calculate(team, side, orientation),
    }
}
