use crate::analyzer::api::{analyze_video, load_recent_videos, load_video, preview_video};
use crate::analyzer::components::{
    AnalyzeForm, ErrorMessage, FlashMessage, RecentAnalyses, VideoCard, VideoInfoCard,
};
use crate::env_variable_utils::ENV_CONFIG;
use crate::models::{VideoInfo, VideoRecord};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn refresh_recent(recent: UseStateHandle<Vec<VideoRecord>>) {
    wasm_bindgen_futures::spawn_local(async move {
        match load_recent_videos().await {
            Ok(videos) => recent.set(videos),
            Err(e) => log::error!("Failed to load recent analyses: {e}"),
        }
    });
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);
    let flash = use_state(|| None::<(String, bool)>); // (message, created)
    let result = use_state(|| None::<VideoRecord>);
    let preview = use_state(|| None::<VideoInfo>);
    let recent = use_state(Vec::<VideoRecord>::new);

    {
        let recent = recent.clone();
        use_effect_with((), move |_| {
            refresh_recent(recent);
            || ()
        });
    }

    let on_analyze = {
        let loading = loading.clone();
        let error_message = error_message.clone();
        let flash = flash.clone();
        let result = result.clone();
        let preview = preview.clone();
        let recent = recent.clone();
        Callback::from(move |url: String| {
            let url = url.trim().to_string();
            flash.set(None);
            preview.set(None);
            if url.is_empty() {
                error_message.set(Some("Enter a video URL".to_string()));
                return;
            }

            loading.set(true);
            error_message.set(None);

            let loading = loading.clone();
            let error_message = error_message.clone();
            let flash = flash.clone();
            let result = result.clone();
            let recent = recent.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match analyze_video(&url).await {
                    Ok(response) => {
                        flash.set(Some((response.message, response.created)));
                        result.set(Some(response.video));
                        refresh_recent(recent);
                    }
                    Err(e) => {
                        result.set(None);
                        error_message.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_preview = {
        let loading = loading.clone();
        let error_message = error_message.clone();
        let flash = flash.clone();
        let result = result.clone();
        let preview = preview.clone();
        Callback::from(move |url: String| {
            let url = url.trim().to_string();
            flash.set(None);
            result.set(None);
            if url.is_empty() {
                error_message.set(Some("Enter a video URL".to_string()));
                return;
            }

            loading.set(true);
            error_message.set(None);

            let loading = loading.clone();
            let error_message = error_message.clone();
            let preview = preview.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match preview_video(&url).await {
                    Ok(info) => preview.set(Some(info)),
                    Err(e) => {
                        preview.set(None);
                        error_message.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    let (flash_message, created) = match &*flash {
        Some((message, created)) => (Some(message.clone()), *created),
        None => (None, false),
    };

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    {ENV_CONFIG.app_name.clone()}
                </h1>

                <AnalyzeForm
                    loading={*loading}
                    on_analyze={on_analyze}
                    on_preview={on_preview}
                />

                <ErrorMessage error_message={(*error_message).clone()} />
                <FlashMessage message={flash_message} created={created} />

                if let Some(video) = &*result {
                    <VideoCard video={video.clone()} />
                    <Link<Route> to={Route::Video { id: video.video_id.clone() }} classes="text-blue-600 hover:underline text-sm">
                        {"Permanent page for this analysis"}
                    </Link<Route>>
                }
                if let Some(info) = &*preview {
                    <VideoInfoCard info={info.clone()} />
                }

                <RecentAnalyses videos={(*recent).clone()} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPageProps {
    pub video_id: String,
}

#[function_component(VideoPage)]
pub fn video_page(props: &VideoPageProps) -> Html {
    let video = use_state(|| None::<VideoRecord>);
    let error_message = use_state(Option::<String>::default);
    let loading = use_state(|| true);

    {
        let video = video.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();
        use_effect_with(props.video_id.clone(), move |video_id| {
            let video_id = video_id.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match load_video(&video_id).await {
                    Ok(Some(found)) => {
                        error_message.set(None);
                        video.set(Some(found));
                    }
                    Ok(None) => {
                        video.set(None);
                        error_message.set(Some("Video not found in the database".to_string()));
                    }
                    Err(e) => {
                        video.set(None);
                        error_message.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl">
                <div class="mb-4">
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline text-sm">
                        {"← Analyze another video"}
                    </Link<Route>>
                </div>
                <ErrorMessage error_message={(*error_message).clone()} />
                if *loading {
                    <p class="text-gray-600">{"Loading..."}</p>
                } else if let Some(video) = &*video {
                    <VideoCard video={video.clone()} />
                    <a href={video.url.clone()} target="_blank" class="text-sm text-blue-600 hover:underline">
                        {"Submitted URL ↗"}
                    </a>
                }
            </div>
        </div>
    }
}
