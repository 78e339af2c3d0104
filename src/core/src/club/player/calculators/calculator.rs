use crate::club::{PlayerPositionType, PlayerSkills};

/// Per-position weights in hundredths, ordered pace, technique, passing, shooting, defense.
/// Each row sums to 100.
pub type PowerWeights = [u32; 5];

const GOALKEEPER_WEIGHTS: PowerWeights = [10, 10, 20, 0, 60];
const DEFENDER_WEIGHTS: PowerWeights = [20, 10, 20, 0, 50];
const MIDFIELDER_WEIGHTS: PowerWeights = [15, 30, 35, 10, 10];
const FORWARD_WEIGHTS: PowerWeights = [30, 20, 10, 40, 0];
const UNWEIGHTED: PowerWeights = [20, 20, 20, 20, 20];

impl PlayerPositionType {
    pub fn power_weights(&self) -> PowerWeights {
        match self {
            PlayerPositionType::Goalkeeper => GOALKEEPER_WEIGHTS,
            PlayerPositionType::Defender => DEFENDER_WEIGHTS,
            PlayerPositionType::Midfielder => MIDFIELDER_WEIGHTS,
            PlayerPositionType::Forward => FORWARD_WEIGHTS,
            PlayerPositionType::Unknown => UNWEIGHTED,
        }
    }
}

pub struct PlayerPowerCalculator;

impl PlayerPowerCalculator {
    /// Weighted sum of the skills for the position, rounded half up.
    ///
    /// Works in integer hundredths so the rounding of `.5` results never depends
    /// on floating point error.
    pub fn calculate(skills: &PlayerSkills, position: PlayerPositionType) -> u8 {
        let weights = position.power_weights();

        let weighted: u32 = skills
            .as_array()
            .iter()
            .zip(weights.iter())
            .map(|(&skill, &weight)| skill as u32 * weight)
            .sum();

        ((weighted + 50) / 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_POSITIONS: [PlayerPositionType; 5] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::Defender,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Forward,
        PlayerPositionType::Unknown,
    ];

    #[test]
    fn test_weights_sum_to_one() {
        for position in ALL_POSITIONS {
            assert_eq!(position.power_weights().iter().sum::<u32>(), 100, "{}", position);
        }
    }

    #[test]
    fn test_goalkeeper_power() {
        // 0.6*90 + 0.2*70 + 0.1*50 + 0.1*60 = 79
        let skills = PlayerSkills::new(50, 60, 70, 10, 90);
        assert_eq!(PlayerPowerCalculator::calculate(&skills, PlayerPositionType::Goalkeeper), 79);
    }

    #[test]
    fn test_defender_power() {
        // 0.5*80 + 0.2*70 + 0.2*60 + 0.1*50 = 71
        let skills = PlayerSkills::new(70, 50, 60, 99, 80);
        assert_eq!(PlayerPowerCalculator::calculate(&skills, PlayerPositionType::Defender), 71);
    }

    #[test]
    fn test_midfielder_power() {
        // 0.35*95 + 0.3*80 + 0.15*80 + 0.1*80 + 0.1*80 = 85.25
        let skills = PlayerSkills::new(80, 80, 95, 80, 80);
        assert_eq!(PlayerPowerCalculator::calculate(&skills, PlayerPositionType::Midfielder), 85);
    }

    #[test]
    fn test_forward_power() {
        // 0.4*90 + 0.3*80 + 0.2*70 + 0.1*60 = 80
        let skills = PlayerSkills::new(80, 70, 60, 90, 1);
        assert_eq!(PlayerPowerCalculator::calculate(&skills, PlayerPositionType::Forward), 80);
    }

    #[test]
    fn test_unknown_position_uses_plain_mean() {
        let skills = PlayerSkills::new(10, 20, 30, 40, 51);
        // (10 + 20 + 30 + 40 + 51) / 5 = 30.2
        assert_eq!(PlayerPowerCalculator::calculate(&skills, PlayerPositionType::Unknown), 30);
    }

    #[test]
    fn test_half_rounds_up() {
        // 0.3*55 + 0.2*50 + 0.1*50 + 0.4*50 = 51.5
        let skills = PlayerSkills::new(55, 50, 50, 50, 50);
        assert_eq!(PlayerPowerCalculator::calculate(&skills, PlayerPositionType::Forward), 52);

        // (1 + 1 + 1 + 1 + 8) / 5 = 2.4, (1 + 1 + 1 + 1 + 9) / 5 = 2.6
        let low = PlayerSkills::new(1, 1, 1, 1, 8);
        let high = PlayerSkills::new(1, 1, 1, 1, 9);
        assert_eq!(PlayerPowerCalculator::calculate(&low, PlayerPositionType::Unknown), 2);
        assert_eq!(PlayerPowerCalculator::calculate(&high, PlayerPositionType::Unknown), 3);
    }

    fn skills_strategy() -> impl Strategy<Value = PlayerSkills> {
        (1u8..=100, 1u8..=100, 1u8..=100, 1u8..=100, 1u8..=100)
            .prop_map(|(pa, te, ps, sh, de)| PlayerSkills::new(pa, te, ps, sh, de))
    }

    proptest! {
        #[test]
        fn test_power_stays_in_skill_range(skills in skills_strategy(), index in 0usize..5) {
            let power = PlayerPowerCalculator::calculate(&skills, ALL_POSITIONS[index]);
            prop_assert!((1..=100).contains(&power));
        }

        #[test]
        fn test_power_is_deterministic(skills in skills_strategy(), index in 0usize..5) {
            let position = ALL_POSITIONS[index];
            prop_assert_eq!(
                PlayerPowerCalculator::calculate(&skills, position),
                PlayerPowerCalculator::calculate(&skills, position)
            );
        }
    }
}
