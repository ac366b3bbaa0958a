use crate::utils::error::{QuestError, Result};

/// 端點回傳值要載入的型別；`Plain` 直接回傳原始值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    Typed(&'static str),
    /// 內建目錄沒有的型別，需在設定檔 `[[manifests]]` 宣告；未宣告時回傳原始值
    Declared(&'static str),
    Plain,
}

#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub group: &'static str,
    pub method: &'static str,
    pub path: &'static str,
    pub returns: ReturnType,
}

impl Endpoint {
    pub fn name(&self) -> String {
        format!("{}.{}", self.group, self.method)
    }
}

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        group: "summoner",
        method: "name",
        path: "/lol/summoner/v4/summoners/by-name/{name}",
        returns: ReturnType::Typed("Summoner"),
    },
    Endpoint {
        group: "summoner",
        method: "account",
        path: "/lol/summoner/v4/summoners/by-account/{accountId}",
        returns: ReturnType::Typed("Summoner"),
    },
    Endpoint {
        group: "summoner",
        method: "id",
        path: "/lol/summoner/v4/summoners/{id}",
        returns: ReturnType::Typed("Summoner"),
    },
    Endpoint {
        group: "summoner",
        method: "unique",
        path: "/lol/summoner/v4/summoners/by-puuid/{puuid}",
        returns: ReturnType::Typed("Summoner"),
    },
    Endpoint {
        group: "mastery",
        method: "all",
        path: "/lol/champion-mastery/v4/champion-masteries/by-summoner/{id}",
        returns: ReturnType::Typed("ChampionMasteryList"),
    },
    Endpoint {
        group: "mastery",
        method: "id",
        path: "/lol/champion-mastery/v4/champion-masteries/by-summoner/{id}/by-champion/{championId}",
        returns: ReturnType::Typed("ChampionMastery"),
    },
    Endpoint {
        group: "mastery",
        method: "score",
        path: "/lol/champion-mastery/v4/scores/by-summoner/{id}",
        returns: ReturnType::Plain,
    },
    Endpoint {
        group: "league",
        method: "positions",
        path: "/lol/league/v4/positions/by-summoner/{id}",
        returns: ReturnType::Declared("LeaguePositionList"),
    },
    Endpoint {
        group: "league",
        method: "id",
        path: "/lol/league/v4/leagues/{id}",
        returns: ReturnType::Declared("League"),
    },
    Endpoint {
        group: "league",
        method: "grandmaster",
        path: "/lol/league/v4/grandmasterleagues/by-queue/{queue}",
        returns: ReturnType::Declared("League"),
    },
    Endpoint {
        group: "league",
        method: "challenger",
        path: "/lol/league/v4/challengerleagues/by-queue/{queue}",
        returns: ReturnType::Declared("League"),
    },
    Endpoint {
        group: "league",
        method: "master",
        path: "/lol/league/v4/masterleagues/by-queue/{queue}",
        returns: ReturnType::Declared("League"),
    },
    Endpoint {
        group: "status",
        method: "shard",
        path: "/lol/status/v3/shard-data",
        returns: ReturnType::Declared("ShardStatus"),
    },
    Endpoint {
        group: "match",
        method: "id",
        path: "/lol/match/v4/matches/{id}",
        returns: ReturnType::Declared("Match"),
    },
    Endpoint {
        group: "match",
        method: "list",
        path: "/lol/match/v4/matchlists/by-account/{id}",
        returns: ReturnType::Declared("MatchHistory"),
    },
    Endpoint {
        group: "match",
        method: "timeline",
        path: "/lol/match/v4/timelines/by-match/{id}",
        returns: ReturnType::Declared("MatchTimeline"),
    },
    Endpoint {
        group: "spectator",
        method: "active",
        path: "/lol/spectator/v4/active-games/by-summoner/{id}",
        returns: ReturnType::Declared("CurrentGameInfo"),
    },
    Endpoint {
        group: "champion",
        method: "rotation",
        path: "/lol/platform/v3/champion-rotations",
        returns: ReturnType::Typed("ChampionInfo"),
    },
    Endpoint {
        group: "spectator",
        method: "featured",
        path: "/lol/spectator/v4/featured-games",
        returns: ReturnType::Typed("FeaturedGames"),
    },
    Endpoint {
        group: "code",
        method: "id",
        path: "/lol/platform/v4/third-party-code/by-summoner/{id}",
        returns: ReturnType::Plain,
    },
];

/// 依 `group.method` 查找端點
pub fn find(name: &str) -> Result<&'static Endpoint> {
    let (group, method) = name.split_once('.').ok_or_else(|| QuestError::UnknownEndpoint {
        endpoint: name.to_string(),
    })?;
    ENDPOINTS
        .iter()
        .find(|e| e.group == group && e.method == method)
        .ok_or_else(|| QuestError::UnknownEndpoint {
            endpoint: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ManifestSource;
    use crate::manifest::ManifestRegistry;

    #[test]
    fn test_find_endpoint() {
        let endpoint = find("mastery.id").unwrap();
        assert_eq!(endpoint.returns, ReturnType::Typed("ChampionMastery"));
        assert_eq!(endpoint.name(), "mastery.id");

        assert_eq!(find("code.id").unwrap().returns, ReturnType::Plain);
        assert!(find("match.tournament").is_err());
        assert!(find("summoner").is_err());
    }

    #[test]
    fn test_find_declared_endpoints() {
        let expected = [
            ("league.positions", "LeaguePositionList"),
            ("league.id", "League"),
            ("league.grandmaster", "League"),
            ("league.challenger", "League"),
            ("league.master", "League"),
            ("status.shard", "ShardStatus"),
            ("match.id", "Match"),
            ("match.list", "MatchHistory"),
            ("match.timeline", "MatchTimeline"),
            ("spectator.active", "CurrentGameInfo"),
        ];
        for (name, type_name) in expected {
            assert_eq!(find(name).unwrap().returns, ReturnType::Declared(type_name));
        }
        assert_eq!(
            find("league.challenger").unwrap().path,
            "/lol/league/v4/challengerleagues/by-queue/{queue}"
        );
    }

    #[test]
    fn test_endpoint_names_are_unique() {
        let mut names: Vec<String> = ENDPOINTS.iter().map(Endpoint::name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ENDPOINTS.len());
    }

    #[test]
    fn test_every_typed_endpoint_has_a_manifest() {
        let registry = ManifestRegistry::with_catalog();
        for endpoint in ENDPOINTS {
            if let ReturnType::Typed(type_name) = endpoint.returns {
                assert!(
                    registry.contains(type_name),
                    "{} returns unknown type {}",
                    endpoint.name(),
                    type_name
                );
            }
        }
    }
}
