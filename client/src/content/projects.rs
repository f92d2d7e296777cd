//! Project catalogue shown in the showcase carousel.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub repository: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub tech: &'static [&'static str],
    /// Screenshot URLs; the first is the slide background.
    pub screenshots: &'static [&'static str],
}

/// Screenshots past this count are only reachable through the gallery.
pub const INLINE_THUMBNAILS: usize = 2;

impl Project {
    #[must_use]
    pub fn cover(&self) -> Option<&'static str> {
        self.screenshots.first().copied()
    }

    /// Thumbnails rendered on the slide itself.
    #[must_use]
    pub fn thumbnails(&self) -> &'static [&'static str] {
        &self.screenshots[..self.screenshots.len().min(INLINE_THUMBNAILS)]
    }

    /// Whether the slide offers a "See All" gallery button.
    #[must_use]
    pub fn has_gallery(&self) -> bool {
        self.screenshots.len() > INLINE_THUMBNAILS
    }
}

pub const PROJECTS: [Project; 5] = [
    Project {
        title: "SecureRights",
        description: "A secure and scalable full-stack platform for digital rights management using React, \
                      Node.js, and MongoDB. Includes user authentication, role-based access, and a \
                      responsive dashboard.",
        repository: Some("https://github.com/sktigpta/Gdg-Solution-Challenge.git"),
        demo: Some("https://securerights.app/"),
        tech: &["React", "Node.js", "MongoDB", "Express", "JWT"],
        screenshots: &["/projects/securerightshome.png", "/projects/securerightsdashboard.png"],
    },
    Project {
        title: "ProofX",
        description: "A productivity and task management tool with a drag-and-drop interface. Built with \
                      modern React practices, including authentication and responsive design.",
        repository: Some("https://github.com/sktigpta/proofX"),
        demo: Some("https://proof-x-client.vercel.app/"),
        tech: &["React", "JavaScript", "CSS3", "Vercel", "REST API"],
        screenshots: &[
            "/projects/proofxdashboard.png",
            "/projects/proofxlogin.png",
            "/projects/proofxsignup.png",
        ],
    },
    Project {
        title: "Farm-floo",
        description: "A modern, responsive farmer-to-customer app with support for product uploads, user \
                      profiles, and order requests. Built with a clean UI and dark mode toggle.",
        repository: Some("https://github.com/sktigpta/Farm-flo"),
        demo: None,
        tech: &["React", "Node.js", "Express", "MongoDB", "Tailwind"],
        screenshots: &["https://via.placeholder.com/800x600/1f2937/ffffff?text=Farm-floo+Dashboard"],
    },
    Project {
        title: "Rent-blee",
        description: "A digital rental platform that allows users to find and book rental properties \
                      easily. Includes features like authentication, dynamic listings, and user-friendly \
                      filtering.",
        repository: Some("https://github.com/sktigpta?tab=repositories"),
        demo: Some("https://rent-blee-demo.vercel.app"),
        tech: &["React", "Next.js", "Tailwind", "MongoDB", "Vercel"],
        screenshots: &[
            "/projects/rentblee/rentbleeHome.png",
            "/projects/rentblee/rentbleeLogin.png",
            "/projects/rentblee/rentbleeRegister.png",
        ],
    },
    Project {
        title: "Order Execution System (C++)",
        description: "A command-line based order matching engine built in C++ for processing buy/sell \
                      requests with low-latency execution, simulating a real-time trading platform.",
        repository: Some("https://github.com/yourusername/order-execution-system"),
        demo: None,
        tech: &["C++", "STL", "Algorithms", "Data Structures", "CLI"],
        screenshots: &["/projects/ordexecoding.png"],
    },
];
