use insight_core::config::CommandConfig;
use insight_core::constants::VERSION;

/// Usage text listing every command with the configured keywords.
pub fn help_text(config: &CommandConfig) -> String {
    let graph = &config.trigger_graph;
    let sep = &config.target_separator;
    format!(
        "====== Group Insight help ====== (v{VERSION})\n\
         \n\
         1. Invite graph\n   \
            Draw who invited whom in a group.\n   \
            {graph}\n   \
            {graph} <group id>\n   \
            {graph}{sep} <target group id>\n   \
            {graph} <source group id> {sep} <target group id>\n\
         \n\
         2. Invite network\n   \
            Show everyone above and below a member.\n   \
            {network} <member id>\n\
         \n\
         3. Remove a member\n   \
            {kick} <member id>\n\
         \n\
         4. Remove a member and everyone they invited (cannot be undone)\n   \
            {downline} <member id>\n\
         \n\
         5. This help\n   \
            {help}\n\
         \n\
         Group and member ids are shown in the invite graph.",
        network = config.trigger_network,
        kick = config.trigger_kick_member,
        downline = config.trigger_kick_downline,
        help = config.trigger_help,
    )
}
