//! The project catalog shown in the portfolio grid.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Grid footprint of a project tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSize {
    /// One column, one row.
    Normal,
    /// Two columns.
    Wide,
    /// Two rows.
    Tall,
    /// Two columns and two rows.
    Big,
}

impl ProjectSize {
    /// CSS class list applying the tile's column/row span.
    #[must_use]
    pub fn tile_class(self) -> &'static str {
        match self {
            Self::Normal => "project-tile",
            Self::Wide => "project-tile project-tile--wide",
            Self::Tall => "project-tile project-tile--tall",
            Self::Big => "project-tile project-tile--big",
        }
    }
}

/// One portfolio entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub size: ProjectSize,
}

/// The fixed catalog, in display order.
pub const CATALOG: &[Project] = &[
    Project { id: 1, title: "Project 01", category: "Architecture", image: "/images/project-01.jpg", size: ProjectSize::Normal },
    Project { id: 2, title: "Project 02", category: "Motion", image: "/images/project-02.jpg", size: ProjectSize::Wide },
    Project { id: 3, title: "Project 03", category: "Verticality", image: "/images/project-03.jpg", size: ProjectSize::Tall },
    Project { id: 4, title: "Project 04", category: "Detail", image: "/images/project-04.jpg", size: ProjectSize::Normal },
    Project { id: 5, title: "Project 05", category: "Featured", image: "/images/project-05.jpg", size: ProjectSize::Big },
    Project { id: 6, title: "Project 06", category: "Simulation", image: "/images/project-06.jpg", size: ProjectSize::Normal },
    Project { id: 7, title: "Project 07", category: "Landscape", image: "/images/project-07.jpg", size: ProjectSize::Wide },
    Project { id: 8, title: "Project 08", category: "Structure", image: "/images/project-08.jpg", size: ProjectSize::Tall },
    Project { id: 9, title: "Project 09", category: "Abstract", image: "/images/project-09.jpg", size: ProjectSize::Normal },
    Project { id: 10, title: "Project 10", category: "Interior", image: "/images/project-10.jpg", size: ProjectSize::Normal },
    Project { id: 11, title: "Project 11", category: "Process", image: "/images/project-11.jpg", size: ProjectSize::Wide },
    Project { id: 12, title: "Project 12", category: "Form", image: "/images/project-12.jpg", size: ProjectSize::Normal },
];
