use leptos::IntoView;
use leptos::component;
use leptos::prelude::AnyView;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::IntoAny;
use leptos::view;

use crate::components::FadeInScale;

struct VideoClip {
    src: &'static str,
    title: &'static str,
}

const VIDEOS: &[VideoClip] = &[
    VideoClip {
        src: "/assets/videos/share/video.mp4",
        title: "Video 1",
    },
    VideoClip {
        src: "/assets/videos/share/video1.mp4",
        title: "Video 2",
    },
    VideoClip {
        src: "/assets/videos/share/video2.mp4",
        title: "Video 3",
    },
    VideoClip {
        src: "/assets/videos/share/video3.mp4",
        title: "Video 4",
    },
    VideoClip {
        src: "/assets/videos/share/video4.mp4",
        title: "Video 5",
    },
];

const EMPTY_CATALOG_NOTE: &str = "No videos to show just yet.";

/// MIME type for the `<source>` element, from the file extension. Anything
/// unrecognized is served as mp4 and left to the browser.
fn video_mime(src: &str) -> &'static str {
    if src.to_ascii_lowercase().ends_with(".mov") {
        "video/quicktime"
    } else {
        "video/mp4"
    }
}

/// The placeholder to show instead of the grid, if any.
fn catalog_note(clips: &[VideoClip]) -> Option<&'static str> {
    clips.is_empty().then_some(EMPTY_CATALOG_NOTE)
}

#[component]
fn VideoCard(clip: &'static VideoClip) -> impl IntoView {
    view! {
        <FadeInScale class="border p-6 rounded-lg shadow-sm hover:shadow-md transition-shadow duration-300">
            <div class="relative w-full h-[240px] lg:h-[300px] bg-black rounded-lg overflow-hidden">
                <video
                    class="absolute top-0 left-0 w-full h-full object-cover"
                    controls=true
                    preload="metadata"
                    playsinline=true
                >
                    <source src=clip.src type=video_mime(clip.src)/>
                    "Your browser does not support the video tag."
                </video>
            </div>
        </FadeInScale>
    }
}

fn gallery(clips: &'static [VideoClip]) -> AnyView {
    if let Some(note) = catalog_note(clips) {
        view! {
            <div class="text-center py-10 bg-secondary border border-gray-200 rounded-lg">
                <p class="text-lg text-gray-500">{note}</p>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                <For
                    each=move || clips
                    key=|clip| clip.title
                    children=|clip| view! { <VideoCard clip/> }
                />
            </div>
        }
        .into_any()
    }
}

#[component]
pub fn Videos() -> impl IntoView {
    view! {
        <div class="py-16 px-4 sm:px-6 lg:px-8 bg-secondary">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-extrabold text-main sm:text-5xl">"Our Videos"</h1>
                    <p class="mt-3 text-xl text-gray-600">
                        "Watch our latest videos and treatments."
                    </p>
                </div>
                <hr class="mb-8 border-gray-200"/>
                {gallery(VIDEOS)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_follows_extension() {
        assert_eq!(video_mime("/assets/videos/share/video.mp4"), "video/mp4");
        assert_eq!(video_mime("/assets/videos/share/clip.MOV"), "video/quicktime");
        assert_eq!(video_mime("/assets/videos/share/clip.mov"), "video/quicktime");
        assert_eq!(video_mime("/assets/videos/share/unmarked"), "video/mp4");
    }

    #[test]
    fn empty_catalog_shows_the_placeholder() {
        assert_eq!(catalog_note(&[]), Some(EMPTY_CATALOG_NOTE));
        assert_eq!(catalog_note(VIDEOS), None);
        // the empty branch must at least build a view
        let _ = gallery(&[]);
    }

    #[test]
    fn catalog_sources_are_site_relative() {
        for clip in VIDEOS {
            assert!(
                clip.src.starts_with("/assets/videos/"),
                "{} points outside the video assets",
                clip.title
            );
        }
    }
}
