#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModulePortal,
    ConfigUnreadable(String), // parse error text
    PortalNotConfigured,

    // === PROMPTS ===
    PromptSelectModules,
    PromptPortalApiUrl,
    PromptPortalAuthToken,
    ConfirmDeleteProject(String), // project name

    // === REPORT MESSAGES ===
    UserReportHeader(String), // uid
    AdminReportHeader,
    SummaryHeader,
    CreatedProjectsHeader,
    CollaboratorProjectsHeader,
    CollaborationStatsHeader,
    UsersOverviewHeader,
    RoleDistributionHeader,
    ByCountryHeader,
    ByCompanyHeader,
    InactiveUsersHeader,
    UsersGrowthHeader,
    ProjectMetricsHeader,
    MostCollaborativeHeader,
    MostActiveHeader,
    MostDelayedHeader,
    NoProjectsFound,

    // === PROJECT MANAGEMENT MESSAGES ===
    ProjectCreated(String, String), // name, id
    ProjectUpdated(String),         // name
    ProjectDeleted(String),         // id
    ProjectNotFound(String),        // id
    ProjectDetailHeader(String),    // name
    TimeInStatusHeader,
    NoChangesRequested,
    OperationCancelled,

    // === COLLABORATOR MESSAGES ===
    CollaboratorAdded(String),     // email
    CollaboratorRemoved(String),   // uid
    UserNotFoundByEmail(String),   // email
    OwnerCannotBeCollaborator,
    AlreadyCollaborator(String),   // email
    NotACollaborator(String),      // uid
}
