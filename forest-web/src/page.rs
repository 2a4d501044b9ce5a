//! The embedded home page. Fetches `/forest` and drops the returned
//! SVG straight into the document, with a button to regenerate.

pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Fractal Forest</title>
    <style>
        body {
            margin: 0;
            padding: 20px;
            background-color: #f0f0f0;
            font-family: Arial, sans-serif;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            text-align: center;
        }
        h1 {
            color: #2c3e50;
        }
        .forest-container {
            background-color: white;
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 0 10px rgba(0,0,0,0.1);
            margin-top: 20px;
        }
        button {
            background-color: #3498db;
            color: white;
            border: none;
            padding: 10px 20px;
            border-radius: 5px;
            cursor: pointer;
            font-size: 16px;
            margin: 10px;
        }
        button:hover {
            background-color: #2980b9;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Fractal Forest</h1>
        <div class="forest-container">
            <div id="forest"></div>
            <button onclick="refreshForest()">Generate New Forest</button>
        </div>
    </div>
    <script>
        function refreshForest() {
            fetch('/forest')
                .then(response => response.text())
                .then(svg => {
                    document.getElementById('forest').innerHTML = svg;
                });
        }
        // Load initial forest
        refreshForest();
    </script>
</body>
</html>"#;
