use super::{ShapeDecl, TypeDecl};

/// 內建的 API 回應型別
pub static CATALOG: &[TypeDecl] = &[
    TypeDecl {
        name: "Summoner",
        shape: ShapeDecl::Object(&[
            ("profileIconId", "int"),
            ("name", "string"),
            ("puuid", "string"),
            ("summonerLevel", "int"),
            ("revisionDate", "int"),
            ("id", "string"),
            ("accountId", "string"),
        ]),
    },
    TypeDecl {
        name: "ChampionMastery",
        shape: ShapeDecl::Object(&[
            ("chestGranted", "boolean"),
            ("championLevel", "int"),
            ("championPoints", "int"),
            ("championId", "double"),
            ("championPointsUntilNextLevel", "double"),
            ("lastPlayTime", "double"),
            ("tokensEarned", "int"),
            ("championPointsSinceLastLevel", "double"),
            ("summonerId", "string"),
        ]),
    },
    TypeDecl {
        name: "ChampionMasteryList",
        shape: ShapeDecl::List("ChampionMastery"),
    },
    TypeDecl {
        name: "ChampionInfo",
        shape: ShapeDecl::Object(&[
            ("freeChampionIds", "int[]"),
            ("freeChampionIdsForNewPlayers", "int[]"),
            ("maxNewPlayerLevel", "int"),
        ]),
    },
    TypeDecl {
        name: "TeamBans",
        shape: ShapeDecl::Object(&[("pickTurn", "int"), ("championId", "int")]),
    },
    TypeDecl {
        name: "TeamBansList",
        shape: ShapeDecl::List("TeamBans"),
    },
    TypeDecl {
        name: "Participant",
        shape: ShapeDecl::Object(&[
            ("profileIconId", "double"),
            ("championId", "double"),
            ("summonerName", "string"),
            ("bot", "boolean"),
            ("spell1Id", "double"),
            ("spell2Id", "double"),
            ("teamId", "double"),
        ]),
    },
    TypeDecl {
        name: "ParticipantList",
        shape: ShapeDecl::List("Participant"),
    },
    TypeDecl {
        name: "BannedChampion",
        shape: ShapeDecl::Object(&[
            ("pickTurn", "int"),
            ("championId", "int"),
            ("teamId", "int"),
        ]),
    },
    TypeDecl {
        name: "BannedChampionList",
        shape: ShapeDecl::List("BannedChampion"),
    },
    TypeDecl {
        name: "Observer",
        shape: ShapeDecl::Object(&[("encryptionKey", "string")]),
    },
    TypeDecl {
        name: "FeaturedGameInfo",
        shape: ShapeDecl::Object(&[
            ("gameMode", "string"),
            ("gameLength", "int"),
            ("mapId", "int"),
            ("gameType", "string"),
            ("bannedChampions", "BannedChampionList"),
            ("gameId", "int"),
            ("observers", "Observer"),
            ("gameQueueConfigId", "int"),
            ("gameStartTime", "int"),
            ("participants", "ParticipantList"),
            ("platformId", "string"),
        ]),
    },
    TypeDecl {
        name: "FeaturedGameInfoList",
        shape: ShapeDecl::List("FeaturedGameInfo"),
    },
    TypeDecl {
        name: "FeaturedGames",
        shape: ShapeDecl::Object(&[
            ("gameList", "FeaturedGameInfoList"),
            ("clientRefreshInterval", "int"),
        ]),
    },
];
