//! User profile component.

use kindmap_types::{ACHIEVEMENTS, CurrentUser, UserStats};
use yew::prelude::*;

use crate::components::{Icon, IconKind, StatCard};

/// Properties for UserProfile component.
#[derive(Properties, PartialEq)]
pub struct UserProfileProps {
    pub user: CurrentUser,
    pub stats: UserStats,
}

/// User profile component.
#[function_component(UserProfile)]
pub fn user_profile(props: &UserProfileProps) -> Html {
    let user = &props.user;
    let stats = &props.stats;
    let progress = stats.current_level_progress.min(100);

    html! {
        <div class="profile">
            <div class="card">
                <div class="profile-header">
                    <img class="avatar avatar-large" src={user.avatar.clone()} alt={user.name.clone()} />
                    <div class="profile-identity">
                        <h1>{ &user.name }</h1>
                        <p class="text-secondary">{ &user.location }</p>
                        <p class="text-secondary text-small">
                            { format!("Member since {}", user.join_date) }
                        </p>
                    </div>
                    <span class="badge badge-rank">{ &stats.rank }</span>
                </div>

                <div class="rank-progress">
                    <div class="rank-progress-labels">
                        <span>{"Progress to next rank"}</span>
                        <span>{ stats.progress_summary() }</span>
                    </div>
                    <div class="progress-bar">
                        <div
                            class="progress-bar-fill"
                            style={format!("width: {progress}%")}
                        />
                    </div>
                </div>
            </div>

            <div class="stats-grid stats-grid-two">
                <StatCard
                    value={stats.total_karma.to_string()}
                    label="Total Karma"
                    detail={format!("+{} this week", stats.weekly_karma)}
                    highlight=true
                />
                <StatCard
                    value={stats.completed_deeds.to_string()}
                    label="Good Deeds"
                    detail="Completed"
                />
                <StatCard
                    value={stats.helped_people.to_string()}
                    label="People Helped"
                />
                <div class="card stat-card">
                    <Icon kind={IconKind::Award} class="icon icon-large icon-accent" />
                    <div class="stat-label">{"Top 10%"}</div>
                    <div class="stat-detail">{"This month"}</div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Recent Achievements"}</h2>
                </div>
                <div class="achievement-list">
                    { for ACHIEVEMENTS.iter().map(|achievement| html! {
                        <div class="achievement" key={achievement.name}>
                            <Icon kind={IconKind::from(achievement.icon)} class="icon icon-large icon-accent" />
                            <div>
                                <h3>{ achievement.name }</h3>
                                <p class="text-secondary">{ achievement.description }</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
