use crate::models::{VideoInfo, VideoRecord};
use crate::router::Route;
use crate::utils::{format_iso8601_date, format_iso8601_duration, format_number, youtube_watch_url};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnalyzeFormProps {
    pub loading: bool,
    pub on_analyze: Callback<String>,
    pub on_preview: Callback<String>,
}

#[function_component(AnalyzeForm)]
pub fn analyze_form(props: &AnalyzeFormProps) -> Html {
    let current_input = use_state(String::new);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_analyze = props.on_analyze.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_analyze.emit((*current_input).clone());
        })
    };

    let on_preview_click = {
        let on_preview = props.on_preview.clone();
        let current_input = current_input.clone();
        Callback::from(move |_: MouseEvent| on_preview.emit((*current_input).clone()))
    };

    html! {
        <form onsubmit={on_submit} class="mb-4">
            <div class="flex">
                <input
                    type="text"
                    class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="https://youtube.com/shorts/..."
                    value={(*current_input).clone()}
                    oninput={on_input}
                    disabled={props.loading}
                />
                <button
                    type="submit"
                    class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                    disabled={props.loading}
                >
                    { if props.loading { "Analyzing..." } else { "Analyze" } }
                </button>
            </div>
            <button
                type="button"
                class="mt-2 text-sm text-blue-600 hover:underline disabled:opacity-50"
                onclick={on_preview_click}
                disabled={props.loading}
            >
                {"Preview without saving"}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct FlashMessageProps {
    pub message: Option<String>,
    pub created: bool,
}

#[function_component(FlashMessage)]
pub fn flash_message(props: &FlashMessageProps) -> Html {
    let Some(msg) = &props.message else {
        return html! {};
    };
    let classes = if props.created {
        "bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4"
    } else {
        "bg-blue-100 border border-blue-400 text-blue-700 px-4 py-3 rounded mb-4"
    };
    html! { <div class={classes}>{ msg }</div> }
}

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub label: AttrValue,
    pub items: Vec<String>,
    #[prop_or_default]
    pub prefix: AttrValue,
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    html! {
        <div class="mt-3">
            <h4 class="text-sm font-semibold text-gray-700 mb-1">
                {format!("{} ({})", props.label, props.items.len())}
            </h4>
            if props.items.is_empty() {
                <p class="text-sm text-gray-500">{"None"}</p>
            } else {
                <div class="flex flex-wrap gap-2">
                    { for props.items.iter().map(|item| html! {
                        <span class="bg-gray-200 text-gray-800 text-xs px-2 py-1 rounded">
                            {format!("{}{}", props.prefix, item)}
                        </span>
                    }) }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatsProps {
    views: u64,
    likes: u64,
    comments: u64,
}

#[function_component(Stats)]
fn stats(props: &StatsProps) -> Html {
    html! {
        <div class="grid grid-cols-3 gap-4 my-4 text-center">
            <div class="bg-blue-100 p-3 rounded-lg">
                <p class="text-sm text-blue-800">{"Views"}</p>
                <p class="text-xl font-bold text-blue-600">{format_number(props.views)}</p>
            </div>
            <div class="bg-green-100 p-3 rounded-lg">
                <p class="text-sm text-green-800">{"Likes"}</p>
                <p class="text-xl font-bold text-green-600">{format_number(props.likes)}</p>
            </div>
            <div class="bg-purple-100 p-3 rounded-lg">
                <p class="text-sm text-purple-800">{"Comments"}</p>
                <p class="text-xl font-bold text-purple-600">{format_number(props.comments)}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoRecord,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    html! {
        <div class="bg-gray-100 rounded-lg p-4 mb-4">
            <h3 class="text-lg font-semibold text-gray-800">
                <a href={youtube_watch_url(&video.video_id)} target="_blank" class="text-blue-600 hover:underline">
                    {video.title.clone()}
                </a>
            </h3>
            <p class="text-sm text-gray-600">
                {format!("📺 {} · 📅 {}", video.channel_title, format_iso8601_date(&video.published_at))}
            </p>
            <Stats views={video.view_count} likes={video.like_count} comments={video.comment_count} />
            <TagList label="Hashtags" items={video.hashtags.clone()} prefix="#" />
            <TagList label="Tags" items={video.tags.clone()} />
            if !video.description.is_empty() {
                <p class="mt-3 text-sm text-gray-700 whitespace-pre-line">{video.description.clone()}</p>
            }
            <p class="mt-3 text-xs text-gray-500">
                {format!("First analysed {}", format_iso8601_date(&video.created_at))}
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoInfoCardProps {
    pub info: VideoInfo,
}

#[function_component(VideoInfoCard)]
pub fn video_info_card(props: &VideoInfoCardProps) -> Html {
    let info = &props.info;
    html! {
        <div class="bg-gray-100 rounded-lg p-4 mb-4">
            if !info.thumbnail_url.is_empty() {
                <img src={info.thumbnail_url.clone()} alt={info.title.clone()} class="rounded mb-3 w-full" />
            }
            <h3 class="text-lg font-semibold text-gray-800">{info.title.clone()}</h3>
            <p class="text-sm text-gray-600">
                <a href={format!("https://www.youtube.com/channel/{}", info.channel_id)} target="_blank" class="text-blue-600 hover:underline">
                    {info.channel_title.clone()}
                </a>
                {format!(" · 📅 {} · ⏱ {}", format_iso8601_date(&info.published_at), format_iso8601_duration(&info.duration))}
            </p>
            <Stats views={info.view_count} likes={info.like_count} comments={info.comment_count} />
            <TagList label="Hashtags" items={info.hashtags.clone()} prefix="#" />
            <TagList label="Tags" items={info.tags.clone()} />
            <p class="mt-3 text-xs text-gray-500">{"Preview only, not saved."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentAnalysesProps {
    pub videos: Vec<VideoRecord>,
}

#[function_component(RecentAnalyses)]
pub fn recent_analyses(props: &RecentAnalysesProps) -> Html {
    html! {
        <div class="mt-6">
            <h2 class="text-xl font-bold text-gray-800 mb-2">{"Recent analyses"}</h2>
            if props.videos.is_empty() {
                <p class="text-gray-500">{"Nothing analysed yet."}</p>
            } else {
                <ul class="divide-y divide-gray-200">
                    { for props.videos.iter().map(|video| html! {
                        <li key={video.video_id.clone()} class="py-2 flex justify-between">
                            <Link<Route> to={Route::Video { id: video.video_id.clone() }} classes="text-blue-600 hover:underline">
                                {video.title.clone()}
                            </Link<Route>>
                            <span class="text-sm text-gray-500">
                                {format!("{} views · {} likes", format_number(video.view_count), format_number(video.like_count))}
                            </span>
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}
