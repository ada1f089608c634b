//! Command dispatch.
//!
//! Each flow reads membership through the shared `SnapshotCache`, runs the
//! graph engine over the snapshot, and reports through `IMessageSink`. Any
//! failure is reported to the group the command came from and returned.

use std::sync::Arc;
use std::time::Instant;

use insight_cache::SnapshotCache;
use insight_client::ApiClient;
use insight_core::config::{CommandConfig, InsightConfig, RenderConfig};
use insight_core::errors::{InsightError, InsightResult, RenderError};
use insight_core::models::{Command, GroupSnapshot, OutboundMessage, RenderArtifact};
use insight_core::traits::{IGraphRenderer, IGroupFetcher, IMemberKicker, IMessageSink};
use insight_graph::{InsightEngine, NetworkReport};
use insight_observability::events;

use crate::help::help_text;
use crate::parser::CommandParser;

/// External services a handler talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub fetcher: Arc<dyn IGroupFetcher>,
    pub kicker: Arc<dyn IMemberKicker>,
    pub messenger: Arc<dyn IMessageSink>,
    /// `None` when no drawing backend is installed.
    pub renderer: Option<Arc<dyn IGraphRenderer>>,
}

/// What a successfully handled command did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    GraphSent {
        target_group: String,
        artifact: RenderArtifact,
    },
    NetworkReported(NetworkReport),
    MemberKicked {
        member_id: String,
    },
    DownlineKicked {
        member_id: String,
        kicked: Vec<String>,
    },
    /// The member invited nobody who is still in the group.
    NothingToKick {
        member_id: String,
    },
    HelpSent,
}

pub struct CommandHandler {
    parser: CommandParser,
    cache: Arc<SnapshotCache>,
    engine: InsightEngine,
    collaborators: Collaborators,
    render: RenderConfig,
    commands: CommandConfig,
}

impl CommandHandler {
    pub fn new(
        config: &InsightConfig,
        cache: Arc<SnapshotCache>,
        collaborators: Collaborators,
    ) -> InsightResult<Self> {
        Ok(Self {
            parser: CommandParser::new(&config.commands)?,
            cache,
            engine: InsightEngine::from_config(config),
            collaborators,
            render: config.render.clone(),
            commands: config.commands.clone(),
        })
    }

    /// Wire a handler to the HTTP backend described by `config.api`.
    pub fn from_config(
        config: &InsightConfig,
        messenger: Arc<dyn IMessageSink>,
        renderer: Option<Arc<dyn IGraphRenderer>>,
    ) -> InsightResult<Self> {
        config.validate()?;
        if !config.api.is_configured() {
            tracing::error!("api base_url or api_key is not configured; commands will fail");
        }
        let client = Arc::new(ApiClient::new(config.api.clone())?);
        let cache = Arc::new(SnapshotCache::new(&config.cache));
        Self::new(
            config,
            cache,
            Collaborators {
                fetcher: client.clone(),
                kicker: client,
                messenger,
                renderer,
            },
        )
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Parse and run a chat message. `Ok(None)` when the text is not a command.
    pub async fn handle_text(
        &self,
        origin_group: &str,
        text: &str,
    ) -> InsightResult<Option<CommandOutcome>> {
        match self.parser.parse(text, origin_group) {
            Ok(None) => Ok(None),
            Ok(Some(command)) => self.handle(origin_group, command).await.map(Some),
            Err(parse_err) => {
                let err = InsightError::from(parse_err);
                tracing::warn!(origin_group, text, error = %err, "malformed command");
                self.notify_failure(origin_group, &err).await;
                Err(err)
            }
        }
    }

    /// Run a parsed command issued in `origin_group`.
    pub async fn handle(
        &self,
        origin_group: &str,
        command: Command,
    ) -> InsightResult<CommandOutcome> {
        let kind = command.kind().as_str();
        events::command_received(kind, origin_group);

        let result = match command {
            Command::GenerateGraph {
                source_group,
                target_group,
            } => {
                self.generate_graph(origin_group, &source_group, &target_group)
                    .await
            }
            Command::QueryNetwork { group, member } => self.query_network(&group, &member).await,
            Command::KickMember { group, member } => self.kick_member(&group, &member).await,
            Command::KickDownline { group, member } => self.kick_downline(&group, &member).await,
            Command::Help { group } => self.help(&group).await,
        };

        if let Err(err) = &result {
            events::command_failed(kind, origin_group, &err.to_string());
            self.notify_failure(origin_group, err).await;
        }
        result
    }

    // ---------------------------------------------------------------------
    // Flows
    // ---------------------------------------------------------------------

    async fn generate_graph(
        &self,
        origin_group: &str,
        source_group: &str,
        target_group: &str,
    ) -> InsightResult<CommandOutcome> {
        self.say(
            origin_group,
            format!("Fetching the invite relationships of group '{source_group}', please wait..."),
        )
        .await?;

        let snapshot = self.non_empty_snapshot(source_group).await?;
        let renderer = self
            .collaborators
            .renderer
            .clone()
            .ok_or(RenderError::Unavailable)?;

        let request = self.engine.analyze(snapshot).render_plan();
        let (nodes, edges) = (request.graph.node_count(), request.graph.edge_count());
        let group_id = request.group_id.clone();
        let started = Instant::now();

        let task = tokio::spawn(async move { renderer.render(request).await });
        let abort = task.abort_handle();
        let artifact = match tokio::time::timeout(self.render.timeout(), task).await {
            Ok(Ok(rendered)) => rendered?,
            Ok(Err(join_err)) => {
                return Err(RenderError::Failed {
                    reason: join_err.to_string(),
                }
                .into())
            }
            Err(_) => {
                abort.abort();
                events::render_timed_out(&group_id, self.render.timeout_secs);
                return Err(RenderError::TimedOut {
                    secs: self.render.timeout_secs,
                }
                .into());
            }
        };
        events::render_completed(&group_id, nodes, edges, started.elapsed().as_millis());

        self.collaborators
            .messenger
            .send(
                target_group,
                OutboundMessage::Image {
                    artifact: artifact.clone(),
                },
            )
            .await?;
        Ok(CommandOutcome::GraphSent {
            target_group: target_group.to_string(),
            artifact,
        })
    }

    async fn query_network(&self, group: &str, member: &str) -> InsightResult<CommandOutcome> {
        self.say(group, format!("Looking up the invite network of '{member}'..."))
            .await?;

        let snapshot = self.non_empty_snapshot(group).await?;
        let report = self.engine.analyze(snapshot).network(member)?;
        self.say(group, report.to_text()).await?;
        Ok(CommandOutcome::NetworkReported(report))
    }

    async fn kick_member(&self, group: &str, member: &str) -> InsightResult<CommandOutcome> {
        self.say(group, format!("Trying to remove member '{member}'..."))
            .await?;

        let snapshot = self.non_empty_snapshot(group).await?;
        if !snapshot.contains(member) {
            return Err(InsightError::MemberNotFound {
                member_id: member.to_string(),
                group_id: group.to_string(),
            });
        }
        let name = snapshot.display_name_of(member).to_string();

        let targets = [member.to_string()];
        let report = self
            .collaborators
            .kicker
            .kick_members(group, &targets)
            .await?;
        self.cache.invalidate(group);
        events::members_kicked(group, targets.len(), &report.kicked);

        if !report.contains(member) {
            return Err(InsightError::KickFailed {
                group_id: group.to_string(),
                reason: format!("{member} was not in the removed list"),
            });
        }
        self.say(group, format!("Member '{name} ({member})' was removed."))
            .await?;
        Ok(CommandOutcome::MemberKicked {
            member_id: member.to_string(),
        })
    }

    async fn kick_downline(&self, group: &str, member: &str) -> InsightResult<CommandOutcome> {
        self.say(
            group,
            format!("Looking up member '{member}' and everyone they invited..."),
        )
        .await?;

        let snapshot = self.non_empty_snapshot(group).await?;
        let analysis = self.engine.analyze(snapshot);
        if !analysis.is_member(member) {
            return Err(InsightError::MemberNotFound {
                member_id: member.to_string(),
                group_id: group.to_string(),
            });
        }
        let name = analysis.display_name(member).to_string();

        let downline = analysis.downstream(member);
        if downline.is_empty() {
            self.say(
                group,
                format!("Member '{name}' has no invited members to remove with them."),
            )
            .await?;
            return Ok(CommandOutcome::NothingToKick {
                member_id: member.to_string(),
            });
        }

        let mut targets = Vec::with_capacity(downline.len() + 1);
        targets.push(member.to_string());
        targets.extend(downline.iter().map(|d| d.id.clone()));

        let mut listing: Vec<String> = Vec::with_capacity(targets.len());
        listing.push(format!("{name} ({member})"));
        listing.extend(downline.iter().map(|d| format!("{} ({})", d.display_name, d.id)));

        let delay = self.commands.kick_confirm_delay();
        let mut warning = format!(
            "WARNING: about to remove the following {} members:\n - {}\n",
            listing.len(),
            listing.join("\n - ")
        );
        if downline.truncated {
            warning.push_str(&format!(
                "The invite network is larger than {} members; only the members listed \
                 above will be removed and the rest stay in the group.\n",
                downline.len()
            ));
        }
        warning.push_str(&format!(
            "\nThis runs in {} seconds and cannot be undone.",
            delay.as_secs()
        ));
        self.say(group, warning).await?;

        tokio::time::sleep(delay).await;

        let report = self
            .collaborators
            .kicker
            .kick_members(group, &targets)
            .await?;
        self.cache.invalidate(group);
        events::members_kicked(group, targets.len(), &report.kicked);

        if report.kicked.is_empty() {
            return Err(InsightError::KickFailed {
                group_id: group.to_string(),
                reason: "nobody was removed".to_string(),
            });
        }
        let mut done = format!("Done: removed {} members.", report.kicked.len());
        if downline.truncated {
            done.push_str(" Members beyond the listed ones are still in the group.");
        }
        self.say(group, done).await?;
        Ok(CommandOutcome::DownlineKicked {
            member_id: member.to_string(),
            kicked: report.kicked,
        })
    }

    async fn help(&self, group: &str) -> InsightResult<CommandOutcome> {
        self.say(group, help_text(&self.commands)).await?;
        Ok(CommandOutcome::HelpSent)
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    async fn non_empty_snapshot(&self, group: &str) -> InsightResult<Arc<GroupSnapshot>> {
        let snapshot = self
            .cache
            .get(group, self.collaborators.fetcher.as_ref())
            .await?;
        if snapshot.is_empty() {
            return Err(InsightError::EmptyGroup {
                group_id: group.to_string(),
            });
        }
        Ok(snapshot)
    }

    async fn say(&self, group: &str, body: String) -> InsightResult<()> {
        self.collaborators
            .messenger
            .send(group, OutboundMessage::text(body))
            .await
    }

    async fn notify_failure(&self, origin_group: &str, err: &InsightError) {
        if let Err(send_err) = self.say(origin_group, err.user_message()).await {
            tracing::warn!(
                origin_group,
                error = %send_err,
                "could not report command failure"
            );
        }
    }
}
