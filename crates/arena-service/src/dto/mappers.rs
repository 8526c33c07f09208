//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use arena_core::entities::{Skill, SkillGroup, Tournament, User, UserProfile, VideoGame};
use arena_core::Snowflake;

use super::responses::{
    CurrentUserResponse, ProfileResponse, SkillGroupResponse, SkillResponse,
    TournamentAttendanceResponse, TournamentResponse, VideoGameResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            superuser: user.superuser,
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.user_id.to_string(),
            bio: profile.bio.clone(),
            updated_at: profile.updated_at,
        }
    }
}

// ============================================================================
// Skill Group Mappers
// ============================================================================

impl From<&SkillGroup> for SkillGroupResponse {
    fn from(group: &SkillGroup) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name.clone(),
            description: group.description.clone(),
            owner_id: group.owner_id.to_string(),
            created_at: group.created_at,
        }
    }
}

impl From<SkillGroup> for SkillGroupResponse {
    fn from(group: SkillGroup) -> Self {
        Self::from(&group)
    }
}

// ============================================================================
// Skill Mappers
// ============================================================================

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id.to_string(),
            name: skill.name.clone(),
            description: skill.description.clone(),
            skill_group_id: skill.skill_group_id.map(|id| id.to_string()),
            created_by: skill.created_by.to_string(),
            created_at: skill.created_at,
        }
    }
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self::from(&skill)
    }
}

// ============================================================================
// Video Game Mappers
// ============================================================================

impl From<&VideoGame> for VideoGameResponse {
    fn from(game: &VideoGame) -> Self {
        Self {
            id: game.id.to_string(),
            title: game.title.clone(),
            description: game.description.clone(),
            release_date: game.release_date,
            created_by: game.created_by.to_string(),
            required_skill_group_id: game.required_skill_group_id.map(|id| id.to_string()),
        }
    }
}

impl From<VideoGame> for VideoGameResponse {
    fn from(game: VideoGame) -> Self {
        Self::from(&game)
    }
}

// ============================================================================
// Tournament Mappers
// ============================================================================

/// Tournament entity together with its attendance sets
#[derive(Debug)]
pub struct TournamentWithAttendance {
    pub tournament: Tournament,
    pub going_users: Vec<Snowflake>,
    pub not_going_users: Vec<Snowflake>,
}

impl From<&TournamentWithAttendance> for TournamentResponse {
    fn from(t: &TournamentWithAttendance) -> Self {
        Self {
            id: t.tournament.id.to_string(),
            name: t.tournament.name.clone(),
            description: t.tournament.description.clone(),
            date: t.tournament.date,
            created_by: t.tournament.created_by.to_string(),
            going_users: t.going_users.iter().map(Snowflake::to_string).collect(),
            not_going_users: t.not_going_users.iter().map(Snowflake::to_string).collect(),
        }
    }
}

impl From<TournamentWithAttendance> for TournamentResponse {
    fn from(t: TournamentWithAttendance) -> Self {
        Self::from(&t)
    }
}

impl From<&TournamentWithAttendance> for TournamentAttendanceResponse {
    fn from(t: &TournamentWithAttendance) -> Self {
        Self {
            tournament_id: t.tournament.id.to_string(),
            going_users: t.going_users.iter().map(Snowflake::to_string).collect(),
            not_going_users: t.not_going_users.iter().map(Snowflake::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_tournament_mapping_carries_both_sets() {
        let t = TournamentWithAttendance {
            tournament: Tournament::new(
                Snowflake::new(1),
                "Spring Cup".to_string(),
                String::new(),
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                Snowflake::new(10),
            ),
            going_users: vec![Snowflake::new(20)],
            not_going_users: vec![Snowflake::new(30), Snowflake::new(40)],
        };

        let response = TournamentResponse::from(&t);
        assert_eq!(response.name, "Spring Cup");
        assert_eq!(response.going_users, vec!["20"]);
        assert_eq!(response.not_going_users, vec!["30", "40"]);
    }

    #[test]
    fn test_skill_mapping_optional_group() {
        let skill = Skill::new(
            Snowflake::new(1),
            "Flick shots".to_string(),
            String::new(),
            None,
            Snowflake::new(5),
        );
        let response = SkillResponse::from(&skill);
        assert!(response.skill_group_id.is_none());
        assert_eq!(response.created_by, "5");
    }
}
