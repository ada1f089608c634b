//! Text → `Command`.
//!
//! Only text that starts with a trigger keyword is a command. A trigger
//! followed by malformed arguments is an error carrying the usage line.

use regex::Regex;

use insight_core::config::CommandConfig;
use insight_core::errors::{CommandParseError, InsightError, InsightResult};
use insight_core::models::{Command, CommandKind};

const GROUP_ID: &str = r"[\w\-\.]+(?:@chatroom)?";
const MEMBER_ID: &str = r"[\w\-\.]+";

#[derive(Debug, Clone)]
pub struct CommandParser {
    config: CommandConfig,
    /// Triggers, longest first, with the command each one starts.
    triggers: Vec<(String, CommandKind)>,
    graph_full: Regex,
    graph_source_only: Regex,
    graph_target_only: Regex,
    graph_default: Regex,
    network: Regex,
    kick_member: Regex,
    kick_downline: Regex,
    help: Regex,
}

impl CommandParser {
    pub fn new(config: &CommandConfig) -> InsightResult<Self> {
        let graph = regex::escape(&config.trigger_graph);
        let sep = regex::escape(&config.target_separator);

        let mut triggers: Vec<(String, CommandKind)> = vec![
            (config.trigger_graph.clone(), CommandKind::GenerateGraph),
            (config.trigger_network.clone(), CommandKind::QueryNetwork),
            (config.trigger_kick_member.clone(), CommandKind::KickMember),
            (config.trigger_kick_downline.clone(), CommandKind::KickDownline),
            (config.trigger_help.clone(), CommandKind::Help),
        ];
        triggers.retain(|(t, _)| !t.is_empty());
        triggers.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Ok(Self {
            graph_full: compile(&format!(
                r"^{graph}\s+(?P<source>{GROUP_ID})\s+{sep}\s+(?P<target>{GROUP_ID})$"
            ))?,
            graph_source_only: compile(&format!(r"^{graph}\s+(?P<source>{GROUP_ID})$"))?,
            graph_target_only: compile(&format!(r"^{graph}{sep}\s+(?P<target>{GROUP_ID})$"))?,
            graph_default: compile(&format!(r"^{graph}$"))?,
            network: member_pattern(&config.trigger_network)?,
            kick_member: member_pattern(&config.trigger_kick_member)?,
            kick_downline: member_pattern(&config.trigger_kick_downline)?,
            help: compile(&format!(r"^{}$", regex::escape(&config.trigger_help)))?,
            triggers,
            config: config.clone(),
        })
    }

    /// Parse `text` sent in `origin_group`.
    ///
    /// `Ok(None)` means the text is not a command at all.
    pub fn parse(
        &self,
        text: &str,
        origin_group: &str,
    ) -> Result<Option<Command>, CommandParseError> {
        let text = text.trim();
        let Some(kind) = self
            .triggers
            .iter()
            .find(|(trigger, _)| text.starts_with(trigger.as_str()))
            .map(|(_, kind)| *kind)
        else {
            return Ok(None);
        };

        let origin = origin_group.to_string();
        let command = match kind {
            CommandKind::GenerateGraph => self.parse_graph(text, origin_group),
            CommandKind::QueryNetwork => capture_member(&self.network, text)
                .map(|member| Command::QueryNetwork { group: origin, member }),
            CommandKind::KickMember => capture_member(&self.kick_member, text)
                .map(|member| Command::KickMember { group: origin, member }),
            CommandKind::KickDownline => capture_member(&self.kick_downline, text)
                .map(|member| Command::KickDownline { group: origin, member }),
            CommandKind::Help => self
                .help
                .is_match(text)
                .then_some(Command::Help { group: origin }),
        };

        command
            .map(Some)
            .ok_or_else(|| CommandParseError::InvalidFormat {
                usage: self.usage(kind),
            })
    }

    fn parse_graph(&self, text: &str, origin_group: &str) -> Option<Command> {
        let graph = |source: &str, target: &str| Command::GenerateGraph {
            source_group: source.to_string(),
            target_group: target.to_string(),
        };

        if let Some(caps) = self.graph_full.captures(text) {
            return Some(graph(&caps["source"], &caps["target"]));
        }
        if let Some(caps) = self.graph_source_only.captures(text) {
            return Some(graph(&caps["source"], origin_group));
        }
        if let Some(caps) = self.graph_target_only.captures(text) {
            return Some(graph(origin_group, &caps["target"]));
        }
        self.graph_default
            .is_match(text)
            .then(|| graph(origin_group, origin_group))
    }

    /// One-line usage of a command kind, using the configured keywords.
    pub fn usage(&self, kind: CommandKind) -> String {
        let c = &self.config;
        match kind {
            CommandKind::GenerateGraph => format!(
                "{t} [<group id>] [{s} <target group id>]",
                t = c.trigger_graph,
                s = c.target_separator
            ),
            CommandKind::QueryNetwork => format!("{} <member id>", c.trigger_network),
            CommandKind::KickMember => format!("{} <member id>", c.trigger_kick_member),
            CommandKind::KickDownline => format!("{} <member id>", c.trigger_kick_downline),
            CommandKind::Help => c.trigger_help.clone(),
        }
    }

    pub fn config(&self) -> &CommandConfig {
        &self.config
    }
}

fn compile(pattern: &str) -> InsightResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| InsightError::ConfigError(format!("invalid command pattern {pattern}: {e}")))
}

fn member_pattern(trigger: &str) -> InsightResult<Regex> {
    compile(&format!(
        r"^{}\s+(?P<member>{MEMBER_ID})$",
        regex::escape(trigger)
    ))
}

fn capture_member(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|caps| caps["member"].to_string())
}
