use crate::club::{Player, PlayerFieldPositionGroup, TeamSide};
use serde::{Deserialize, Serialize};

/// Field orientation: horizontal on wide screens, vertical on narrow ones.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Marker position in percent of field width (`x`) and height (`y`).
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PlayerMarker {
    pub player_id: u32,
    pub x: f32,
    pub y: f32,
}

pub struct FormationLayout;

impl FormationLayout {
    /// Places every player of `team` on the line of its position group,
    /// spreading each line evenly across the field.
    pub fn calculate(
        team: &[&Player],
        side: TeamSide,
        orientation: FieldOrientation,
    ) -> Vec<PlayerMarker> {
        let mut markers = Vec::with_capacity(team.len());

        for group in PlayerFieldPositionGroup::ALL {
            let line: Vec<&Player> = team
                .iter()
                .filter(|p| p.position.position_group() == group)
                .copied()
                .collect();

            if line.is_empty() {
                continue;
            }

            let offset = Self::line_offset(group, side, orientation);
            let gap = 100.0 / (line.len() + 1) as f32;

            for (index, player) in line.iter().enumerate() {
                let spread = gap * (index + 1) as f32;

                let (x, y) = match orientation {
                    FieldOrientation::Horizontal => (offset, spread),
                    FieldOrientation::Vertical => (spread, offset),
                };

                markers.push(PlayerMarker {
                    player_id: player.id,
                    x,
                    y,
                });
            }
        }

        markers
    }

    fn line_offset(
        group: PlayerFieldPositionGroup,
        side: TeamSide,
        orientation: FieldOrientation,
    ) -> f32 {
        use PlayerFieldPositionGroup::*;

        match (orientation, side, group) {
            (FieldOrientation::Horizontal, TeamSide::A, Goalkeeper) => 8.0,
            (FieldOrientation::Horizontal, TeamSide::A, Defender) => 25.0,
            (FieldOrientation::Horizontal, TeamSide::A, Midfielder) => 40.0,
            (FieldOrientation::Horizontal, TeamSide::A, Forward) => 45.0,
            (FieldOrientation::Horizontal, TeamSide::B, Goalkeeper) => 92.0,
            (FieldOrientation::Horizontal, TeamSide::B, Defender) => 75.0,
            (FieldOrientation::Horizontal, TeamSide::B, Midfielder) => 60.0,
            (FieldOrientation::Horizontal, TeamSide::B, Forward) => 55.0,

            (FieldOrientation::Vertical, TeamSide::A, Goalkeeper) => 8.0,
            (FieldOrientation::Vertical, TeamSide::A, Defender) => 28.0,
            (FieldOrientation::Vertical, TeamSide::A, Midfielder) => 45.0,
            (FieldOrientation::Vertical, TeamSide::A, Forward) => 60.0,
            (FieldOrientation::Vertical, TeamSide::B, Goalkeeper) => 92.0,
            (FieldOrientation::Vertical, TeamSide::B, Defender) => 72.0,
            (FieldOrientation::Vertical, TeamSide::B, Midfielder) => 55.0,
            (FieldOrientation::Vertical, TeamSide::B, Forward) => 40.0,
        }
    }
}
