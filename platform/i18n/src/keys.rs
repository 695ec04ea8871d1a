//! Stable message identifiers and their built-in English text.

macro_rules! message_keys {
    ($($variant:ident => $id:literal, $text:literal;)+) => {
        /// Identifier of a user-facing message.
        ///
        /// The `id` is what catalogs are keyed by; it never changes once shipped.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum MessageKey {
            $($variant,)+
        }

        impl MessageKey {
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)+];

            pub fn id(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $id,)+
                }
            }

            /// English text used when a catalog has no entry for the key.
            pub fn default_text(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $text,)+
                }
            }
        }
    };
}

message_keys! {
    You => "activity.user.you", "You";
    SystemUser => "activity.user.system", "Metabase";
    InstallUser => "activity.install.user", "Hello World!";
    InstallSummary => "activity.install.summary", "Metabase is up and running.";
    UnknownName => "activity.unknown_name", "Unknown";
    GenericSummary => "activity.generic", "did some super awesome stuff that's hard to describe";
    AlertCreated => "activity.alert.create", "created an alert about - ";
    AlertDeleted => "activity.alert.delete", "deleted an alert about - ";
    QuestionSaved => "activity.card.save", "saved the question ";
    QuestionAboutTable => "activity.card.about_table", " about ";
    QuestionDeleted => "activity.card.delete", "deleted the question ";
    DashboardCreated => "activity.dashboard.create", "created the dashboard ";
    DashboardDeleted => "activity.dashboard.delete", "deleted the dashboard ";
    DashboardCardAdded => "activity.dashboard.add_cards", "added a question to the dashboard - ";
    DashboardCardRemoved => "activity.dashboard.remove_cards", "removed a question from the dashboard - ";
    DatabaseSynced => "activity.database.sync", "received the latest data from ";
    MetricCreated => "activity.metric.create", "added the metric ";
    MetricUpdated => "activity.metric.update", "made changes to the metric ";
    MetricDeleted => "activity.metric.delete", "removed the metric ";
    SegmentCreated => "activity.segment.create", "added the filter ";
    SegmentUpdated => "activity.segment.update", "made changes to the filter ";
    SegmentDeleted => "activity.segment.delete", "removed the filter ";
    PulseCreated => "activity.pulse.create", "created the pulse ";
    PulseDeleted => "activity.pulse.delete", "deleted the pulse ";
    TableTo => "activity.table.to", " to the ";
    TableOf => "activity.table.of", " of the ";
    TableSuffix => "activity.table.suffix", " table";
    UserJoined => "activity.user_joined", "joined!";
    FeedLoading => "feed.loading", "Loading...";
    FeedError => "feed.error", "An error occurred: {0}";
    FeedEmptyTitle => "feed.empty.title", "Hmmm, looks like nothing has happened yet.";
    FeedEmptyHint => "feed.empty.hint", "Save a question and get this baby rolling!";
    TimeSeconds => "time.seconds_ago", "a few seconds ago";
    TimeMinute => "time.minute_ago", "a minute ago";
    TimeMinutes => "time.minutes_ago", "{0} minutes ago";
    TimeHour => "time.hour_ago", "an hour ago";
    TimeHours => "time.hours_ago", "{0} hours ago";
    TimeDay => "time.day_ago", "a day ago";
    TimeDays => "time.days_ago", "{0} days ago";
    TimeMonth => "time.month_ago", "a month ago";
    TimeMonths => "time.months_ago", "{0} months ago";
    TimeYear => "time.year_ago", "a year ago";
    TimeYears => "time.years_ago", "{0} years ago";
    GreetingHey => "greeting.hey", "Hey there";
    GreetingHowsItGoing => "greeting.hows_it_going", "How's it going";
    GreetingHowdy => "greeting.howdy", "Howdy";
    GreetingGreetings => "greeting.greetings", "Greetings";
    GreetingGoodToSee => "greeting.good_to_see", "Good to see you";
    GreetingAddressed => "greeting.addressed", "{0}, {1}";
    GreetingAddressedQuestion => "greeting.addressed_question", "{0}, {1}?";
    CuriosityKnow => "greeting.curiosity.know", "What do you want to know?";
    CuriosityMind => "greeting.curiosity.mind", "What's on your mind?";
    CuriosityFindOut => "greeting.curiosity.find_out", "What do you want to find out?";
}

impl MessageKey {
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.id() == id)
    }
}
