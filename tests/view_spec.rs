use atelier_core::content::Catalogue;
use atelier_core::view::{
    self, ProjectList, TagView, VisualPane, EMPTY_PROJECTS_NOTICE, NO_VISUALS_PLACEHOLDER,
    SELECT_PROJECT_PROMPT,
};
use speculate2::speculate;

const FIXTURE: &str = r#"{
  "collections": [
    {
      "id": "climate", "title": "Climate", "headline": "Forecasting", "description": "Pipelines.",
      "featuredProject": "fognet",
      "metrics": [["Focus", "Forecasts"], ["Stack", "PyTorch"]],
      "workflow": [
        ["Collect", "Ingest feeds"],
        ["Correct", "Calibrate bias"],
        ["Model", "Run ensembles"],
        ["Share", "Publish briefings"]
      ],
      "projects": [
        {
          "id": "downscaling", "title": "Downscaling", "summary": "ViT downscaling.",
          "tags": ["Internship"],
          "visuals": [
            {"type": "image", "src": "assets/a.gif", "alt": "Downscaling animation", "caption": "ERA5-guided"},
            {"type": "image", "src": "", "alt": "broken"},
            {"type": "video", "src": "assets/clip.mp4", "alt": "clip"}
          ],
          "links": [
            {"label": "Preprint", "url": "https://example.org/paper"},
            {"label": "Dead", "url": ""}
          ],
          "snippet": "pred = model(x)"
        },
        {
          "id": "fognet", "title": "FogNet", "summary": "Fog forecasting.",
          "tags": [{"label": "AI2ES", "url": "https://www.ai2es.org"}],
          "visuals": [
            {"type": "video", "src": "assets/clip.mp4", "alt": "clip"}
          ]
        }
      ]
    },
    {
      "id": "bare", "title": "Bare", "headline": "h", "description": "d",
      "projects": []
    }
  ],
  "certifications": [
    {"image": "full-a.png", "thumbnail": "thumb-a.png", "alt": "Cert A", "caption": "A"},
    {"image": "full-b.png", "alt": "Cert B", "caption": "B"}
  ]
}"#;

speculate! {
    before {
        let catalogue = Catalogue::from_json_str(FIXTURE).expect("fixture parses");
        let climate = catalogue.get("climate").expect("climate exists");
        let bare = catalogue.get("bare").expect("bare exists");
    }

    describe "collection header and metrics" {
        it "mirrors the collection fields" {
            let header = view::collection_header(climate);
            assert_eq!(header.title, "Climate");
            assert_eq!(header.headline, "Forecasting");
            assert_eq!(header.description, "Pipelines.");
        }

        it "renders metric pairs in declaration order" {
            let metrics = view::metrics(climate);
            let pairs: Vec<(&str, &str)> = metrics
                .iter()
                .map(|m| (m.label.as_str(), m.value.as_str()))
                .collect();
            assert_eq!(pairs, vec![("Focus", "Forecasts"), ("Stack", "PyTorch")]);
        }
    }

    describe "visual panes" {
        it "numbers workflow steps from 1 with two-digit padding" {
            let pane = view::default_visuals(climate);
            let VisualPane::Workflow(steps) = pane else {
                panic!("expected workflow pane");
            };
            assert_eq!(steps.len(), 4);
            assert_eq!(steps[0].heading, "01 · Collect");
            assert_eq!(steps[0].detail, "Ingest feeds");
            assert_eq!(steps[3].heading, "04 · Share");
        }

        it "falls back to the placeholder without workflow steps" {
            assert_eq!(
                view::default_visuals(bare),
                VisualPane::Placeholder(NO_VISUALS_PLACEHOLDER)
            );
        }

        it "keeps only image visuals with a non-empty source" {
            let project = climate.project("downscaling").expect("exists");
            let pane = view::project_visuals(climate, Some(project));
            let VisualPane::Figures(figures) = pane else {
                panic!("expected figures");
            };
            assert_eq!(figures.len(), 1);
            assert_eq!(figures[0].src, "assets/a.gif");
            assert_eq!(figures[0].alt, "Downscaling animation");
            assert_eq!(figures[0].caption.as_deref(), Some("ERA5-guided"));
        }

        it "renders exactly the workflow view when no visual is usable" {
            let project = climate.project("fognet").expect("exists");
            let pane = view::project_visuals(climate, Some(project));
            assert_eq!(pane, view::default_visuals(climate));
        }

        it "renders the default pane when nothing is selected" {
            assert_eq!(
                view::project_visuals(climate, None),
                view::default_visuals(climate)
            );
        }
    }

    describe "project cards" {
        it "orders the featured project first" {
            let cards = view::project_cards(climate);
            let ids: Vec<&str> = cards.cards().iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids, vec!["fognet", "downscaling"]);
            assert_eq!(cards.cards()[0].reveal_index, 0);
            assert_eq!(cards.cards()[1].reveal_index, 1);
        }

        it "falls back to the first visual's source for the thumbnail" {
            let cards = view::project_cards(climate);
            // fognet has no explicit thumbnail; its first visual is a video
            // but the card thumbnail intentionally mirrors the raw list.
            assert_eq!(cards.cards()[0].thumbnail.as_deref(), Some("assets/clip.mp4"));
        }

        it "drops links with empty urls" {
            let cards = view::project_cards(climate);
            let downscaling = &cards.cards()[1];
            assert_eq!(downscaling.links.len(), 1);
            assert_eq!(downscaling.links[0].label, "Preprint");
        }

        it "renders the empty-state notice for a bare collection" {
            assert_eq!(view::project_cards(bare), ProjectList::Empty(EMPTY_PROJECTS_NOTICE));
        }
    }

    describe "tags" {
        it "renders link tags as navigable and plain tags as text" {
            let cards = view::project_cards(climate);
            assert_eq!(
                cards.cards()[0].tags,
                vec![TagView::Link {
                    label: "AI2ES".to_string(),
                    url: "https://www.ai2es.org".to_string(),
                }]
            );
            assert_eq!(
                cards.cards()[1].tags,
                vec![TagView::Text("Internship".to_string())]
            );
        }
    }

    describe "project detail" {
        it "carries title, summary, tags, and the literal snippet" {
            let project = climate.project("downscaling").expect("exists");
            let detail = view::project_detail(climate, Some(project));
            assert_eq!(detail.title, "Downscaling");
            assert_eq!(detail.summary.as_deref(), Some("ViT downscaling."));
            assert_eq!(detail.snippet.as_deref(), Some("pred = model(x)"));
            assert_eq!(detail.tags.len(), 1);
        }

        it "shows the prompt and clears optional fragments with no selection" {
            let detail = view::project_detail(climate, None);
            assert_eq!(detail.title, SELECT_PROJECT_PROMPT);
            assert_eq!(detail.summary, None);
            assert!(detail.tags.is_empty());
            assert_eq!(detail.snippet, None);
            assert_eq!(detail.visuals, view::default_visuals(climate));
        }
    }

    describe "idempotence" {
        it "reproduces structurally equal output on repeated renders" {
            let project = climate.project("downscaling");
            assert_eq!(view::metrics(climate), view::metrics(climate));
            assert_eq!(view::project_cards(climate), view::project_cards(climate));
            assert_eq!(
                view::project_visuals(climate, project),
                view::project_visuals(climate, project)
            );
            assert_eq!(
                view::project_detail(climate, project),
                view::project_detail(climate, project)
            );
            assert_eq!(
                view::certification_cards(catalogue.certifications()),
                view::certification_cards(catalogue.certifications())
            );
        }
    }

    describe "certifications" {
        it "prefers the thumbnail and falls back to the full image" {
            let cards = view::certification_cards(catalogue.certifications());
            assert_eq!(cards[0].thumbnail, "thumb-a.png");
            assert_eq!(cards[1].thumbnail, "full-b.png");
            assert_eq!(cards[1].full_image, "full-b.png");
        }

        it "builds the lightbox with a 1-based position label" {
            let lightbox = view::lightbox(catalogue.certifications(), 1).expect("in range");
            assert_eq!(lightbox.src, "full-b.png");
            assert_eq!(lightbox.position, "2 / 2");
            assert!(view::lightbox(catalogue.certifications(), 2).is_none());
        }
    }

    describe "announcements" {
        it "announces visuals for image figures and snapshot for fallbacks" {
            let downscaling = climate.project("downscaling");
            assert_eq!(
                view::announcement(climate, downscaling),
                "Downscaling visuals loaded"
            );

            let fognet = climate.project("fognet");
            assert_eq!(view::announcement(climate, fognet), "FogNet snapshot loaded");
            assert_eq!(view::announcement(climate, None), "Climate snapshot loaded");
        }
    }
}
