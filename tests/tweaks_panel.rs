use graph_tweaks::sections::{
    BehaviorDraft, BehaviorSection, FilterDraft, FilterSection, PhysicsSection, Section, SectionId,
    VisualDraft, VisualSection,
};
use graph_tweaks::settings::{
    BehaviorConfig, ColoringMethod, FollowMode, LabelMode, LocalSame, ParentLinks, PhysicsConfig,
    Trigger,
};
use graph_tweaks::{
    color_list, ColorToken, FlagStore, MemoryBackend, PanelView, SharedTheme, ThemeStore, Tweaks,
    TweaksContext, TweaksPanel, DEFAULT_HIGHLIGHT_COLOR, SHOW_TWEAKS_KEY,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn tags() -> Vec<String> {
    ["work", "home", "books", "travel"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn random_color(rng: &mut StdRng) -> ColorToken {
    let list = color_list();
    list[rng.random_range(0..list.len())].clone()
}

/// One setter call on a random domain with a random value.
fn random_write(tweaks: &mut Tweaks, rng: &mut StdRng) {
    match rng.random_range(0..8) {
        0 => tweaks.physics.update(|p| {
            p.gravity = rng.random_range(-100.0..100.0);
            p.enabled = rng.random();
        }),
        1 => tweaks.filter.update(|f| {
            f.orphans = rng.random();
            f.blacklist("work");
        }),
        2 => tweaks.visuals.update(|v| {
            v.link_width = rng.random_range(0.1..5.0);
            v.labels = LabelMode::Always;
        }),
        3 => tweaks.mouse.update(|m| m.preview = Trigger::Never),
        4 => tweaks.behavior.update(|b| {
            b.zoom_speed = rng.random_range(0.0..5000.0);
            b.follow = FollowMode::Local;
        }),
        5 => tweaks.coloring.update(|c| c.method = ColoringMethod::Community),
        6 => tweaks.local.update(|l| l.neighbors = rng.random_range(1..=5)),
        _ => {
            let color = random_color(rng);
            tweaks.tag_colors.update(|t| t.set("home", color));
        }
    }
}

#[test]
fn reset_restores_defaults_after_any_setter_sequence() {
    let mut rng = StdRng::seed_from_u64(0x7ea5);
    for _ in 0..50 {
        let store = FlagStore::new(MemoryBackend::new());
        let theme = SharedTheme::default();
        let panel = TweaksPanel::new(&store, &theme);
        let mut tweaks = Tweaks::default();

        for _ in 0..rng.random_range(0..20) {
            random_write(&mut tweaks, &mut rng);
        }
        theme.set_highlight_color(random_color(&mut rng));
        let tag_colors_before = tweaks.tag_colors.clone();

        panel.reset_all(&mut tweaks);

        let expected = Tweaks {
            tag_colors: tag_colors_before,
            ..Tweaks::default()
        };
        assert_eq!(tweaks, expected);
        assert_eq!(theme.highlight_color().as_str(), DEFAULT_HIGHLIGHT_COLOR);
    }
}

#[test]
fn reset_leaves_session_state_alone() {
    let mut store = FlagStore::new(MemoryBackend::new());
    let theme = SharedTheme::default();
    let mut panel = TweaksPanel::new(&store, &theme);
    let mut tweaks = Tweaks::default();
    tweaks.tag_colors.update(|t| {
        t.set("work", ColorToken::from("teal.300"));
        t.set("stale", ColorToken::from("black"));
    });
    panel.toggle_visibility(&mut store);
    let tag_revision = tweaks.tag_colors.revision();
    let tag_colors = tweaks.tag_colors.get().clone();

    panel.reset_all(&mut tweaks);

    assert_eq!(tweaks.tag_colors.get(), &tag_colors);
    assert_eq!(tweaks.tag_colors.revision(), tag_revision);
    assert!(panel.is_open());
    assert!(store.get(SHOW_TWEAKS_KEY, false));
}

#[test]
fn reset_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);
    let store = FlagStore::new(MemoryBackend::new());
    let theme = SharedTheme::default();
    let panel = TweaksPanel::new(&store, &theme);
    let mut tweaks = Tweaks::default();
    for _ in 0..10 {
        random_write(&mut tweaks, &mut rng);
    }

    panel.reset_all(&mut tweaks);
    let once = (tweaks.clone(), theme.snapshot());
    panel.reset_all(&mut tweaks);
    assert_eq!((tweaks, theme.snapshot()), once);
}

#[test]
fn visibility_toggles_back_and_persists_each_step() {
    let backend = MemoryBackend::new();
    let mut store = FlagStore::new(backend.clone());
    let theme = SharedTheme::default();
    let mut panel = TweaksPanel::new(&store, &theme);
    let original = panel.is_open();

    panel.toggle_visibility(&mut store);
    let restarted = TweaksPanel::new(&FlagStore::new(backend.clone()), &theme);
    assert_eq!(restarted.is_open(), !original);

    panel.toggle_visibility(&mut store);
    assert_eq!(panel.is_open(), original);
    let restarted = TweaksPanel::new(&FlagStore::new(backend), &theme);
    assert_eq!(restarted.is_open(), original);
}

#[test]
fn unavailable_storage_means_closed_panel() {
    let backend = MemoryBackend::new();
    backend.insert_raw(SHOW_TWEAKS_KEY, "true");
    backend.set_unavailable(true);
    let mut store = FlagStore::new(backend);
    let mut panel = TweaksPanel::new(&store, &SharedTheme::default());
    assert!(!panel.is_open());

    // still usable for the session
    assert!(panel.toggle_visibility(&mut store));
    assert!(panel.is_open());
}

#[test]
fn opening_shows_collapsed_sections_that_multi_expand() {
    let mut store = FlagStore::new(MemoryBackend::new());
    let mut panel = TweaksPanel::new(&store, &SharedTheme::default());
    panel.toggle_visibility(&mut store);

    let PanelView::Open { sections } = panel.render() else {
        panic!("panel should be open");
    };
    let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Filter", "Physics", "Visual", "Behavior"]);
    assert!(sections.iter().all(|s| !s.expanded));

    panel.toggle_section(SectionId::Filter);
    panel.toggle_section(SectionId::Physics);
    let PanelView::Open { sections } = panel.render() else {
        panic!("panel should be open");
    };
    let expanded: Vec<_> = sections.iter().map(|s| s.expanded).collect();
    assert_eq!(expanded, vec![true, true, false, false]);
}

#[test]
fn gravity_and_highlight_then_reset() {
    let mut store = FlagStore::new(MemoryBackend::new());
    let theme = SharedTheme::default();
    let mut panel = TweaksPanel::new(&store, &theme);
    let mut tweaks = Tweaks::default();

    let mut physics = PhysicsSection {
        physics: &mut tweaks.physics,
    };
    let mut draft = physics.draft();
    draft.gravity = -50.0;
    physics.commit(draft);
    assert_eq!(tweaks.physics.get().gravity, -50.0);

    theme.set_highlight_color(ColorToken::from("teal.300"));

    panel.toggle_visibility(&mut store);
    panel.set_expanded(SectionId::Physics, true);
    let revisions = tweaks.revisions();
    let mut three_dim = false;
    run_frames(&mut panel, &mut store, &mut tweaks, &theme, &mut three_dim);
    assert_eq!(tweaks.physics.get().gravity, -50.0);
    assert_eq!(tweaks.revisions(), revisions);
    assert_eq!(theme.highlight_color(), ColorToken::from("teal.300"));

    panel.reset_all(&mut tweaks);
    assert_eq!(tweaks.physics.get(), &PhysicsConfig::default());
    assert_eq!(theme.highlight_color(), ColorToken::from("purple.500"));
}

/// Revisions of every domain plus the current highlight color.
fn footprint(tweaks: &Tweaks, theme: &SharedTheme) -> ([u64; 8], ColorToken) {
    (tweaks.revisions(), theme.highlight_color())
}

fn changed_domains(before: [u64; 8], after: [u64; 8]) -> Vec<usize> {
    (0..8).filter(|&i| before[i] != after[i]).collect()
}

// indices into Tweaks::revisions()
const PHYSICS: usize = 0;
const FILTER: usize = 1;
const VISUALS: usize = 2;
const MOUSE: usize = 3;
const BEHAVIOR: usize = 4;
const TAG_COLORS: usize = 5;
const COLORING: usize = 6;
const LOCAL: usize = 7;

#[test]
fn section_edits_stay_inside_their_slice() {
    let mut rng = StdRng::seed_from_u64(99);
    let tags = tags();
    let list = color_list();
    let theme = SharedTheme::default();
    let mut tweaks = Tweaks::default();

    for _ in 0..200 {
        let (before, highlight_before) = footprint(&tweaks, &theme);
        let section = SectionId::ALL[rng.random_range(0..SectionId::ALL.len())];
        let allowed: &[usize] = match section {
            SectionId::Filter => {
                let mut s = FilterSection {
                    filter: &mut tweaks.filter,
                    tag_colors: &mut tweaks.tag_colors,
                    local: &mut tweaks.local,
                    tags: &tags,
                    color_list: &list,
                };
                let mut d: FilterDraft = s.draft();
                d.filter.dailies = rng.random();
                d.filter.parent = ParentLinks::ALL[rng.random_range(0..3)];
                d.local.neighbors = rng.random_range(1..=5);
                if rng.random() {
                    d.tag_colors.set("books", random_color(&mut rng));
                }
                s.commit(d);
                &[FILTER, TAG_COLORS, LOCAL]
            }
            SectionId::Physics => {
                let mut s = PhysicsSection {
                    physics: &mut tweaks.physics,
                };
                let mut d = s.draft();
                d.charge = rng.random_range(-1500.0..0.0);
                s.commit(d);
                &[PHYSICS]
            }
            SectionId::Visual => {
                let mut s = VisualSection {
                    visuals: &mut tweaks.visuals,
                    coloring: &mut tweaks.coloring,
                    theme: &theme,
                    three_dim: rng.random(),
                };
                let mut d: VisualDraft = s.draft();
                d.visuals.node_rel = rng.random_range(1.0..10.0);
                d.coloring.method = ColoringMethod::ALL[rng.random_range(0..2)];
                d.highlight_color = random_color(&mut rng);
                s.commit(d);
                &[VISUALS, COLORING]
            }
            SectionId::Behavior => {
                let mut s = BehaviorSection {
                    behavior: &mut tweaks.behavior,
                    mouse: &mut tweaks.mouse,
                };
                let mut d: BehaviorDraft = s.draft();
                d.behavior.local_same = LocalSame::ALL[rng.random_range(0..2)];
                d.mouse.background_exits_local = rng.random();
                s.commit(d);
                &[BEHAVIOR, MOUSE]
            }
        };

        let (after, highlight_after) = footprint(&tweaks, &theme);
        for i in changed_domains(before, after) {
            assert!(allowed.contains(&i), "{section:?} wrote domain #{i}");
        }
        if section != SectionId::Visual {
            assert_eq!(highlight_after, highlight_before);
        }
    }
}

#[test]
fn unchanged_draft_commits_nothing() {
    let theme = SharedTheme::default();
    let mut tweaks = Tweaks::default();
    let mut s = BehaviorSection {
        behavior: &mut tweaks.behavior,
        mouse: &mut tweaks.mouse,
    };
    let d = s.draft();
    s.commit(d);
    assert_eq!(tweaks.revisions(), [0; 8]);
    assert_eq!(tweaks.behavior.get(), &BehaviorConfig::default());

    let mut s = VisualSection {
        visuals: &mut tweaks.visuals,
        coloring: &mut tweaks.coloring,
        theme: &theme,
        three_dim: false,
    };
    let d = s.draft();
    s.commit(d);
    assert_eq!(tweaks.revisions(), [0; 8]);
}

#[test]
fn tag_color_edit_fills_missing_tags() {
    let tags = tags();
    let list = color_list();
    let mut tweaks = Tweaks::default();
    let mut s = FilterSection {
        filter: &mut tweaks.filter,
        tag_colors: &mut tweaks.tag_colors,
        local: &mut tweaks.local,
        tags: &tags,
        color_list: &list,
    };
    let mut d = s.draft();
    d.tag_colors.set("travel", ColorToken::from("pink.500"));
    s.commit(d);

    let tc = tweaks.tag_colors.get();
    assert_eq!(tc.len(), tags.len());
    assert_eq!(tc.get("travel"), Some(&ColorToken::from("pink.500")));
    assert_eq!(tc.get("work"), Some(&list[0]));
}

fn run_frames(
    panel: &mut TweaksPanel,
    store: &mut FlagStore<MemoryBackend>,
    tweaks: &mut Tweaks,
    theme: &SharedTheme,
    three_dim: &mut bool,
) {
    let ctx = egui::Context::default();
    let tags = tags();
    for _ in 0..3 {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                panel.show(
                    ui,
                    &mut *store,
                    TweaksContext {
                        tweaks: &mut *tweaks,
                        theme,
                        tags: &tags,
                        three_dim: &mut *three_dim,
                    },
                );
            });
        });
    }
}

#[test]
fn drawing_the_open_panel_writes_nothing() {
    for three_dim in [false, true] {
        let mut store = FlagStore::new(MemoryBackend::new());
        let theme = SharedTheme::default();
        let mut panel = TweaksPanel::new(&store, &theme);
        panel.toggle_visibility(&mut store);
        for id in SectionId::ALL {
            panel.set_expanded(id, true);
        }
        let mut tweaks = Tweaks::default();
        let mut view = three_dim;

        run_frames(&mut panel, &mut store, &mut tweaks, &theme, &mut view);

        assert_eq!(tweaks.revisions(), [0; 8]);
        assert_eq!(theme.highlight_color().as_str(), DEFAULT_HIGHLIGHT_COLOR);
        assert_eq!(view, three_dim);
        assert!(panel.is_open());
    }
}

#[test]
fn drawing_the_closed_panel_writes_nothing() {
    let mut store = FlagStore::new(MemoryBackend::new());
    let theme = SharedTheme::default();
    let mut panel = TweaksPanel::new(&store, &theme);
    let mut tweaks = Tweaks::default();
    let mut three_dim = false;

    run_frames(&mut panel, &mut store, &mut tweaks, &theme, &mut three_dim);

    assert!(!panel.is_open());
    assert_eq!(tweaks.revisions(), [0; 8]);
}

#[test]
fn drawing_keeps_values_outside_slider_ranges() {
    let mut store = FlagStore::new(MemoryBackend::new());
    let theme = SharedTheme::default();
    let mut panel = TweaksPanel::new(&store, &theme);
    panel.toggle_visibility(&mut store);
    for id in SectionId::ALL {
        panel.set_expanded(id, true);
    }
    let mut tweaks = Tweaks::default();
    tweaks.physics.update(|p| {
        p.gravity = -500.0;
        p.charge = 10.0;
        p.link_strength = 5.0;
        p.link_iterations = 12;
    });
    tweaks.behavior.update(|b| {
        b.zoom_padding = 1000.0;
        b.zoom_speed = -1.0;
    });
    let stored = tweaks.clone();
    let revisions = tweaks.revisions();
    let mut three_dim = false;

    run_frames(&mut panel, &mut store, &mut tweaks, &theme, &mut three_dim);

    assert_eq!(tweaks.revisions(), revisions);
    assert_eq!(tweaks, stored);
    assert_eq!(tweaks.physics.get().gravity, -500.0);
    assert_eq!(tweaks.behavior.get().zoom_padding, 1000.0);
}
