//! Known game ids

/// A game title associated with a PIC game id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u16,
    pub title: &'static str,
}

/// Title reported for ids that are not in [`GAMES`]
pub const UNKNOWN_GAME: &str = "Unknown game";

/// Every game id seen on a dumped PIC
pub const GAMES: &[Game] = &[
    Game { id: 231, title: "Bio F.R.E.A.K.S" },
    Game { id: 236, title: "Off Road Challenge" },
    Game { id: 310, title: "Wayne Gretzky's 3D Hockey" },
    Game { id: 314, title: "Mace: The Dark Age" },
    Game { id: 315, title: "San Francisco Rush" },
    Game { id: 322, title: "Gauntlet Legends" },
    Game { id: 324, title: "Vapor TRX" },
    Game { id: 328, title: "California Speed" },
    Game { id: 330, title: "Tenth Degree" },
    Game { id: 331, title: "San Francisco Rush The Rock: Alcatraz Edition" },
    Game { id: 336, title: "San Francisco Rush 2049" },
    Game { id: 342, title: "Midway Skins Game" },
    Game { id: 346, title: "Gauntlet Dark Legacy" },
    Game { id: 348, title: "San Francisco Rush 2049 Tournament Edition" },
    Game { id: 352, title: "San Francisco Rush 2049 Special Edition" },
    Game { id: 419, title: "Revolution X" },
    Game { id: 430, title: "WWF Wrestlemania" },
    Game { id: 439, title: "Mortal Kombat 3" },
    Game { id: 444, title: "NFL Blitz" },
    Game { id: 449, title: "Cruis'n World" },
    Game { id: 452, title: "War Gods" },
    Game { id: 459, title: "NBA Hangtime" },
    Game { id: 461, title: "Mortal Kombat 4" },
    Game { id: 463, title: "Ultimate Mortal Kombat 3" },
    Game { id: 465, title: "Rampage World Tour" },
    Game { id: 467, title: "NBA Showtime" },
    Game { id: 468, title: "Invasion: The Abductors" },
    Game { id: 471, title: "Hyperdrive" },
    Game { id: 472, title: "Cruis'n Exotica" },
    Game { id: 481, title: "NFL Blitz '99" },
    Game { id: 486, title: "Carnevil" },
    Game { id: 491, title: "The Grid" },
    Game { id: 494, title: "NFL Blitz 2000" },
    Game { id: 528, title: "Development PIC" },
];

/// Get game by id
pub fn game_by_id(id: u16) -> Option<&'static Game> {
    GAMES.iter().find(|g| g.id == id)
}

/// Title for a game id, or [`UNKNOWN_GAME`]
pub fn title_for(id: u16) -> &'static str {
    game_by_id(id).map(|g| g.title).unwrap_or(UNKNOWN_GAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_lookup() {
        assert_eq!(title_for(315), "San Francisco Rush");
        assert_eq!(title_for(528), "Development PIC");
        assert_eq!(game_by_id(231).map(|g| g.title), Some("Bio F.R.E.A.K.S"));
    }

    #[test]
    fn test_unknown_game() {
        assert_eq!(title_for(0), UNKNOWN_GAME);
        assert_eq!(title_for(999), UNKNOWN_GAME);
        assert!(game_by_id(316).is_none());
    }

    #[test]
    fn test_ids_unique_and_in_range() {
        for (i, game) in GAMES.iter().enumerate() {
            assert!(game.id <= 999);
            assert!(
                GAMES[i + 1..].iter().all(|g| g.id != game.id),
                "duplicate id {}",
                game.id
            );
        }
    }
}
